use proptest::prelude::*;

use dfbench::generate::{ColumnData, GenerateOptions, generate_dataset};
use dfbench::schema::{Field, Schema};

fn schema() -> Schema {
    Schema::new(vec![
        Field::int("a", -50, 50),
        Field::float("b", 0.0, 1.0),
        Field::categorical("c", &["x", "y", "z"]),
    ])
}

proptest! {
    #[test]
    fn prop_parallel_matches_sequential(seed in any::<u64>(), records in 1usize..120) {
        let schema = schema();
        let seq = generate_dataset(&schema, records, &GenerateOptions { parallel: false, seed, threads: None }).unwrap();
        let par = generate_dataset(&schema, records, &GenerateOptions { parallel: true, seed, threads: Some(3) }).unwrap();
        for field in schema.fields() {
            prop_assert_eq!(seq.column(field.name), par.column(field.name));
        }
    }

    #[test]
    fn prop_int_columns_honor_bounds(seed in any::<u64>(), low in -1000i64..0, span in 0i64..2000, records in 1usize..80) {
        let high = low + span;
        let schema = Schema::new(vec![Field::int("v", low, high)]);
        let dataset = generate_dataset(&schema, records, &GenerateOptions { parallel: false, seed, threads: None }).unwrap();
        match dataset.column("v").unwrap() {
            ColumnData::Int(values) => {
                prop_assert_eq!(values.len(), records);
                prop_assert!(values.iter().all(|&x| x >= low && x <= high));
            }
            other => prop_assert!(false, "unexpected column data: {:?}", other),
        }
    }

    #[test]
    fn prop_row_count_is_exact(records in 0usize..200) {
        let dataset = generate_dataset(&schema(), records, &GenerateOptions::default()).unwrap();
        prop_assert_eq!(dataset.records(), records);
        for field in schema().fields() {
            prop_assert_eq!(dataset.column(field.name).unwrap().len(), records);
        }
    }
}
