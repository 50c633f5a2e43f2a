use proptest::prelude::*;
use voxbridge::{num, Args, CallInfo, FromBoundary, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "\\PC*".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 16, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Value::List)
    })
}

proptest! {
    #[test]
    fn conversion_is_total(value in arb_value()) {
        // No boundary value may panic a conversion; `None` is the only
        // acceptable failure mode.
        let _ = u64::from_boundary(&value);
        let _ = u32::from_boundary(&value);
        let _ = i32::from_boundary(&value);
        let _ = String::from_boundary(&value);
        let _ = Vec::<String>::from_boundary(&value);
    }

    #[test]
    fn arity_succeeds_iff_count_in_range(
        count in 0usize..8,
        min in 0usize..8,
        max in 0usize..8,
    ) {
        let call: CallInfo = (0..count).map(|i| Value::from(i as u32)).collect();
        let result = num(&call, min, max);
        prop_assert_eq!(result.is_ok(), min <= count && count <= max);
        if let Ok(found) = result {
            prop_assert_eq!(found, count);
        }
    }

    #[test]
    fn native_and_string_numbers_agree(n in any::<u32>()) {
        let fallback = n.wrapping_add(1);
        let native = CallInfo::new(vec![Value::from(n)]);
        let text = CallInfo::new(vec![Value::from(n.to_string())]);

        let native_args = Args::bind(&native, 1, 1).unwrap();
        let text_args = Args::bind(&text, 1, 1).unwrap();
        prop_assert_eq!(native_args.uint(0, fallback), n);
        prop_assert_eq!(text_args.uint(0, fallback), n);
    }

    #[test]
    fn string_extraction_copies_exactly(text in "[a-zA-Z0-9 _-]{0,32}") {
        let call = CallInfo::new(vec![Value::from(text.as_str())]);
        let args = Args::bind(&call, 1, 1).unwrap();
        let copy = args.string(0, "fallback").unwrap();
        prop_assert_eq!(copy.as_c_str().to_bytes(), text.as_bytes());
    }

    #[test]
    fn list_success_preserves_count_and_order(
        texts in prop::collection::vec("[a-z]{0,8}", 0..8),
    ) {
        let items: Vec<Value> = texts.iter().map(|s| Value::from(s.as_str())).collect();
        let call = CallInfo::new(vec![Value::List(items)]);
        let args = Args::bind(&call, 1, 1).unwrap();

        let list = args.string_list(0, &["sentinel"]).unwrap();
        prop_assert_eq!(list.len(), texts.len());
        for (got, expected) in list.iter().zip(&texts) {
            prop_assert_eq!(got.as_c_str().to_bytes(), expected.as_bytes());
        }
    }
}
