//! Property tests for orders file record parsing.

use std::collections::BTreeMap;

use csv::StringRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

use grocer::{parse_record, parse_records};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parse_record never panics on arbitrary printable fields.
    #[test]
    fn property_parse_record_never_panics(
        fields in proptest::collection::vec("[ -~]{0,12}", 0..=7)
    ) {
        let record = StringRecord::from(fields);
        let _ = parse_record(&record, 1);
    }

    /// PROPERTY: a well-formed record round-trips into the order it encodes.
    #[test]
    fn property_well_formed_record_round_trips(
        id in any::<u64>(),
        cents in proptest::collection::btree_map("[a-z]{1,8}", 0i64..100_000, 0..=6),
    ) {
        let mut fields = vec![id.to_string()];
        for (name, &c) in &cents {
            fields.push(name.clone());
            fields.push(Decimal::new(c, 2).to_string());
        }

        let order = parse_record(&StringRecord::from(fields), 1).unwrap();

        let expected: BTreeMap<String, Decimal> = cents
            .iter()
            .map(|(name, &c)| (name.clone(), Decimal::new(c, 2)))
            .collect();
        prop_assert_eq!(order.id, id);
        prop_assert_eq!(order.products, expected);
    }

    /// PROPERTY: parse_records yields exactly one order per record, in
    /// record order, whenever every record is well formed.
    #[test]
    fn property_one_order_per_record(
        ids in proptest::collection::vec(any::<u64>(), 0..=10)
    ) {
        let records: Vec<StringRecord> = ids
            .iter()
            .map(|id| StringRecord::from(vec![id.to_string()]))
            .collect();

        let orders = parse_records(&records).unwrap();

        let parsed_ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
        prop_assert_eq!(parsed_ids, ids);
    }
}
