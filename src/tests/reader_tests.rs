#[cfg(test)]
mod reader_tests {
    use crate::reader::{read_machine_log, read_slice_geometry};
    use crate::table::Cell;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("log_pipeline_{}", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_repeated_header_lines_are_dropped() {
        let path = write_fixture(
            "machine_repeated_header.log",
            "Time|       LIR|       SP5|\n\
             08:00:00|        12|      1.50|\n\
             Time|       LIR|       SP5|\n\
             08:00:05|        13|      1.55|\n",
        );
        let table = read_machine_log(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.height(), 2);
        assert_eq!(table.columns(), &["Time", "LIR", "SP5"]);
        assert_eq!(*table.cell(1, 0), Cell::Text("08:00:05".to_string()));
    }

    #[test]
    fn test_trailing_delimiter_column_is_dropped() {
        let path = write_fixture(
            "machine_trailing_delim.log",
            "Time|       LIR|\n08:00:00|        12|\n",
        );
        let table = read_machine_log(&path).unwrap();
        fs::remove_file(&path).ok();

        // The trailing '|' produces an empty-named column which must not
        // survive into the table.
        assert_eq!(table.columns(), &["Time", "LIR"]);
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn test_cells_are_trimmed_text() {
        let path = write_fixture(
            "machine_trimmed.log",
            "Time|       SP5|\n08:00:00|      1.50|\n",
        );
        let table = read_machine_log(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(*table.cell(0, 1), Cell::Text("1.50".to_string()));
    }

    #[test]
    fn test_empty_file_is_a_typed_error() {
        let path = write_fixture("machine_empty.log", "");
        let result = read_machine_log(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_slice_geometry_renames_and_parses_comma_decimals() {
        let path = write_fixture(
            "slice_renames.csv",
            "Total slice surface (mm2);Part (mm?);Non solid support (mm?);Solid support (mm?)\n\
             10000,0;6000,5;2999,5;1000,0\n\
             20000,0;12000,0;6000,0;2000,0\n",
        );
        let table = read_slice_geometry(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.columns(), &["tss", "part", "nss", "ss"]);
        assert_eq!(*table.cell(0, 0), Cell::Float(10000.0));
        assert_eq!(*table.cell(0, 1), Cell::Float(6000.5));
    }

    #[test]
    fn test_slice_geometry_drops_incomplete_columns() {
        let path = write_fixture(
            "slice_incomplete.csv",
            "Total slice surface (mm2);Comment\n10000,0;\n20000,0;noted\n",
        );
        let table = read_slice_geometry(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.columns(), &["tss"]);
        assert_eq!(table.height(), 2);
    }
}
