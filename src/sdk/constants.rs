//! Constant tables exported by the addon
//!
//! Discriminants mirror the vendor SDK headers exactly; do not renumber.

use crate::sdk::SdkEnum;
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// 64-bit server connection handle.
pub type ConnectionHandle = u64;

macro_rules! sdk_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum $name {
            $($variant = $value),+
        }

        impl SdkEnum for $name {
            fn from_raw(raw: u64) -> Option<Self> {
                match raw {
                    $(v if v == $value as u64 => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn raw(self) -> u32 {
                self as u32
            }
        }
    };
}

sdk_enum! {
    /// Severity of an SDK log callback.
    LogLevel {
        Critical = 0x00,
        Error = 0x01,
        Warning = 0x02,
        Debug = 0x03,
        Info = 0x04,
        Devel = 0x05,
    }
}

sdk_enum! {
    /// Why a client appeared in or vanished from view.
    Visibility {
        Enter = 0x00,
        Retain = 0x01,
        Leave = 0x02,
    }
}

sdk_enum! {
    /// Connection state machine of a server connection handler.
    ConnectStatus {
        Disconnected = 0x00,
        Connecting = 0x01,
        Connected = 0x02,
        Establishing = 0x03,
        Established = 0x04,
    }
}

sdk_enum! {
    TalkStatus {
        NotTalking = 0x00,
        Talking = 0x01,
        TalkingWhileDisabled = 0x02,
    }
}

sdk_enum! {
    CodecType {
        SpeexNarrowband = 0x01,
        SpeexWideband = 0x02,
        SpeexUltrawideband = 0x03,
        CeltMono = 0x04,
        OpusVoice = 0x05,
        OpusMusic = 0x06,
    }
}

sdk_enum! {
    CodecEncryptionMode {
        PerChannel = 0x00,
        ForcedOff = 0x01,
        ForcedOn = 0x02,
    }
}

sdk_enum! {
    TextMessageTargetMode {
        Client = 0x01,
        Channel = 0x02,
        Server = 0x03,
    }
}

sdk_enum! {
    MuteInputStatus {
        None = 0x00,
        Muted = 0x01,
    }
}

sdk_enum! {
    MuteOutputStatus {
        None = 0x00,
        Muted = 0x01,
    }
}

sdk_enum! {
    HardwareInputStatus {
        Disabled = 0x00,
        Enabled = 0x01,
    }
}

sdk_enum! {
    HardwareOutputStatus {
        Disabled = 0x00,
        Enabled = 0x01,
    }
}

sdk_enum! {
    InputDeactivationStatus {
        Active = 0x00,
        Deactivated = 0x01,
    }
}

sdk_enum! {
    /// Why a client left a channel or the server.
    ReasonIdentifier {
        None = 0x00,
        Moved = 0x01,
        Subscription = 0x02,
        LostConnection = 0x03,
        KickChannel = 0x04,
        KickServer = 0x05,
        KickServerBan = 0x06,
        ServerStop = 0x07,
        ClientDisconnect = 0x08,
        ChannelUpdate = 0x09,
        ChannelEdit = 0x0A,
        ClientDisconnectServerShutdown = 0x0B,
    }
}

sdk_enum! {
    ChannelProperty {
        Name = 0x00,
        Topic = 0x01,
        Description = 0x02,
        Password = 0x03,
        Codec = 0x04,
        CodecQuality = 0x05,
        MaxClients = 0x06,
        MaxFamilyClients = 0x07,
        Order = 0x08,
        FlagPermanent = 0x09,
        FlagSemiPermanent = 0x0A,
        FlagDefault = 0x0B,
        FlagPassword = 0x0C,
        CodecLatencyFactor = 0x0D,
        CodecIsUnencrypted = 0x0E,
        SecuritySalt = 0x0F,
        DeleteDelay = 0x10,
    }
}

sdk_enum! {
    ClientProperty {
        UniqueIdentifier = 0x00,
        Nickname = 0x01,
        Version = 0x02,
        Platform = 0x03,
        FlagTalking = 0x04,
        InputMuted = 0x05,
        OutputMuted = 0x06,
        OutputOnlyMuted = 0x07,
        InputHardware = 0x08,
        OutputHardware = 0x09,
        InputDeactivated = 0x0A,
        IdleTime = 0x0B,
        DefaultChannel = 0x0C,
        DefaultChannelPassword = 0x0D,
        ServerPassword = 0x0E,
        MetaData = 0x0F,
        IsMuted = 0x10,
        IsRecording = 0x11,
        VolumeModificator = 0x12,
        VersionSign = 0x13,
        SecurityHash = 0x14,
    }
}

sdk_enum! {
    VirtualServerProperty {
        UniqueIdentifier = 0x00,
        Name = 0x01,
        WelcomeMessage = 0x02,
        Platform = 0x03,
        Version = 0x04,
        MaxClients = 0x05,
        Password = 0x06,
        ClientsOnline = 0x07,
        ChannelsOnline = 0x08,
        Created = 0x09,
        Uptime = 0x0A,
        CodecEncryptionMode = 0x0B,
    }
}

/// Bitmask of log output targets. Unlike the tables above this is a set,
/// not a single discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogTargets(u32);

impl LogTargets {
    pub const NONE: Self = Self(0x00);
    pub const FILE: Self = Self(0x01);
    pub const CONSOLE: Self = Self(0x02);
    pub const USER_LOGGING: Self = Self(0x04);
    pub const NO_NETLOGGING: Self = Self(0x08);
    pub const DATABASE: Self = Self(0x0010);
    pub const SYSLOG: Self = Self(0x0020);

    const MASK: u32 = 0x3F;

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl SdkEnum for LogTargets {
    /// Any combination of known bits decodes; unknown bits reject the whole
    /// mask.
    fn from_raw(raw: u64) -> Option<Self> {
        if raw & !(Self::MASK as u64) == 0 {
            Some(Self(raw as u32))
        } else {
            None
        }
    }

    fn raw(self) -> u32 {
        self.0
    }
}

impl BitOr for LogTargets {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogTargets {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
