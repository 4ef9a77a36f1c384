#[cfg(test)]
mod consumption_tests {
    use crate::consumption::derive_consumption;
    use crate::errors::TypeError;
    use crate::table::{Cell, DataTable};

    fn sensor_table(values: &[f64]) -> DataTable {
        let mut table = DataTable::new(vec!["SP5".to_string()]);
        for &v in values {
            table.push_row(vec![Cell::Float(v)]);
        }
        table
    }

    fn float_column(table: &DataTable, name: &str) -> Vec<f64> {
        let col = table.column_index(name).unwrap();
        table
            .rows()
            .iter()
            .map(|row| row[col].as_f64().unwrap())
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_gate_suppresses_small_positive_differences() {
        let mut table = sensor_table(&[1.0, 1.005, 1.05]);
        derive_consumption(&mut table, "SP5", 0.02).unwrap();

        let cons = float_column(&table, "Ag_Cons");
        assert!(cons[0].is_nan());
        assert_close(cons[1], 0.0); // 0.005 < 0.02 gated to zero
        assert_close(cons[2], 0.045);

        let cumulative = float_column(&table, "Ag_Cons_cs");
        assert!(cumulative[0].is_nan());
        assert_close(cumulative[1], 0.0);
        assert_close(cumulative[2], 0.045);
    }

    #[test]
    fn test_negative_differences_always_gated() {
        // The gate compares the signed difference, so a large negative drop
        // is suppressed just like small jitter.
        let mut table = sensor_table(&[5.0, 4.0]);
        derive_consumption(&mut table, "SP5", 0.02).unwrap();

        let cons = float_column(&table, "Ag_Cons");
        assert!(cons[0].is_nan());
        assert_close(cons[1], 0.0);
    }

    #[test]
    fn test_row_count_preserved_and_columns_present() {
        let mut table = sensor_table(&[1.0, 2.0, 3.0, 4.0]);
        let before = table.height();
        derive_consumption(&mut table, "SP5", 0.02).unwrap();

        assert_eq!(table.height(), before);
        assert!(table.column_index("Ag_Cons").is_some());
        assert!(table.column_index("Ag_Cons_cs").is_some());
    }

    #[test]
    fn test_cumulative_sum_accumulates_gated_values() {
        let mut table = sensor_table(&[1.0, 1.5, 1.5, 2.5]);
        derive_consumption(&mut table, "SP5", 0.02).unwrap();

        let cumulative = float_column(&table, "Ag_Cons_cs");
        assert_close(cumulative[1], 0.5);
        assert_close(cumulative[2], 0.5); // zero difference gated, sum unchanged
        assert_close(cumulative[3], 1.5);
    }

    #[test]
    fn test_missing_source_column_is_an_error() {
        let mut table = sensor_table(&[1.0]);
        let err = derive_consumption(&mut table, "SP9", 0.02).unwrap_err();
        match err {
            TypeError::MissingColumn { column } => assert_eq!(column, "SP9"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_single_row_yields_nan_pair() {
        let mut table = sensor_table(&[3.5]);
        derive_consumption(&mut table, "SP5", 0.02).unwrap();

        let cons = float_column(&table, "Ag_Cons");
        let cumulative = float_column(&table, "Ag_Cons_cs");
        assert!(cons[0].is_nan());
        assert!(cumulative[0].is_nan());
    }
}
