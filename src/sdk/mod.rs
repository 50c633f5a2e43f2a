//! Client SDK constant tables
//!
//! The scripting runtime sees every SDK constant as a plain number, so each
//! table decodes from a boundary `u64` and re-encodes as the `u32` the
//! vendor headers declare.

pub mod constants;

pub use constants::{
    ChannelProperty, ClientProperty, CodecEncryptionMode, CodecType, ConnectStatus,
    ConnectionHandle, HardwareInputStatus, HardwareOutputStatus, InputDeactivationStatus,
    LogLevel, LogTargets, MuteInputStatus, MuteOutputStatus, ReasonIdentifier, TalkStatus,
    TextMessageTargetMode, Visibility, VirtualServerProperty,
};

/// A numeric SDK table decodable from a boundary argument.
pub trait SdkEnum: Sized + Copy {
    /// Decode a raw discriminant, `None` if the table has no such entry.
    fn from_raw(raw: u64) -> Option<Self>;

    /// The discriminant as the vendor headers declare it.
    fn raw(self) -> u32;
}
