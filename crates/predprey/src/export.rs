//! Comma-separated export of a simulated run.
//!
//! The table has a localized header row (`Time,Prey,Predators` in English)
//! followed by one row per grid point. Numbers are written with the shortest
//! decimal form that parses back to the same `f64`; NaN is written as an
//! empty field and infinities as `inf`/`-inf`.

use std::{
    fmt::Write as _,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use thiserror::Error;
use tracing::info;

use crate::{
    i18n::{Language, Strings},
    series::{Record, TimeSeries},
};

/// Default name of the exported file.
pub const FILE_NAME: &str = "predator_prey_simulation.csv";

/// Errors that can occur while writing or reading an exported table.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("the table has no header row")]
    MissingHeader,

    #[error("header {0:?} does not match any supported language")]
    UnknownHeader(String),

    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {value:?} is not a number")]
    Number { line: usize, value: String },
}

/// A table read back from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Language whose column names the header used.
    pub language: Language,
    pub series: TimeSeries,
}

fn header(strings: &Strings) -> String {
    strings.columns().join(",")
}

fn push_value(line: &mut String, value: f64) {
    if !value.is_nan() {
        // Writing into a `String` cannot fail.
        let _ = write!(line, "{value:?}");
    }
}

fn push_record(line: &mut String, record: &Record) {
    push_value(line, record.time);
    line.push(',');
    push_value(line, record.prey);
    line.push(',');
    push_value(line, record.predator);
    line.push('\n');
}

/// Renders the whole table into a string.
#[must_use]
pub fn to_csv_string(series: &TimeSeries, strings: &Strings) -> String {
    let mut csv = header(strings);
    csv.push('\n');
    for record in series {
        push_record(&mut csv, record);
    }
    csv
}

/// Writes the table to `writer`, one row at a time.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the writer fails.
pub fn write<W: Write>(
    series: &TimeSeries,
    strings: &Strings,
    mut writer: W,
) -> Result<(), CsvError> {
    writeln!(writer, "{}", header(strings))?;

    let mut line = String::new();
    for record in series {
        line.clear();
        push_record(&mut line, record);
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the table to a file, replacing any existing file.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the file cannot be created or written.
pub fn save(series: &TimeSeries, strings: &Strings, path: &Path) -> Result<(), CsvError> {
    let file = File::create(path)?;
    write(series, strings, BufWriter::new(file))?;

    info!(path = %path.display(), rows = series.len(), "exported simulation");
    Ok(())
}

fn parse_value(field: &str, line: usize) -> Result<f64, CsvError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    field.parse().map_err(|_| CsvError::Number {
        line,
        value: field.to_owned(),
    })
}

fn detect_language(header: &str) -> Result<Language, CsvError> {
    let header = header.trim_start_matches('\u{feff}');
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    Language::ALL
        .into_iter()
        .find(|language| columns == language.strings().columns())
        .ok_or_else(|| CsvError::UnknownHeader(header.to_owned()))
}

/// Reads a table written by [`write`].
///
/// The header decides the [`Language`]; blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the input cannot be read, has no header or an unknown
/// one, or contains a row that is not three numbers.
pub fn read<R: BufRead>(reader: R) -> Result<Table, CsvError> {
    let mut lines = reader.lines();
    let language = match lines.next() {
        Some(header) => detect_language(&header?)?,
        None => return Err(CsvError::MissingHeader),
    };

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1.
        let number = index + 2;

        let fields: Vec<&str> = line.split(',').collect();
        let [time, prey, predator] = fields.as_slice() else {
            return Err(CsvError::FieldCount {
                line: number,
                found: fields.len(),
            });
        };
        records.push(Record {
            time: parse_value(time, number)?,
            prey: parse_value(prey, number)?,
            predator: parse_value(predator, number)?,
        });
    }

    Ok(Table {
        language,
        series: TimeSeries::from_records(records),
    })
}

/// Reads a table from a file written by [`save`].
///
/// # Errors
///
/// See [`read`].
pub fn load(path: &Path) -> Result<Table, CsvError> {
    read(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TimeSeries {
        TimeSeries::from_records(vec![
            Record {
                time: 0.0,
                prey: 40.0,
                predator: 9.0,
            },
            Record {
                time: 0.5,
                prey: 38.4,
                predator: 10.35,
            },
            Record {
                time: 1.0,
                prey: 36.3456,
                predator: 11.8197,
            },
        ])
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = to_csv_string(&series(), Language::En.strings());

        assert_eq!(
            csv,
            "Time,Prey,Predators\n\
             0.0,40.0,9.0\n\
             0.5,38.4,10.35\n\
             1.0,36.3456,11.8197\n"
        );
    }

    #[test]
    fn streaming_writer_matches_string_rendering() {
        let strings = Language::Ru.strings();
        let mut bytes = Vec::new();

        write(&series(), strings, &mut bytes).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            to_csv_string(&series(), strings)
        );
    }

    #[test]
    fn round_trip_recovers_values_and_language() {
        for language in Language::ALL {
            let csv = to_csv_string(&series(), language.strings());

            let table = read(csv.as_bytes()).unwrap();

            assert_eq!(table.language, language);
            assert_eq!(table.series, series());
        }
    }

    #[test]
    fn non_finite_values_survive_round_trip() {
        let series = TimeSeries::from_records(vec![Record {
            time: 2.0,
            prey: f64::NAN,
            predator: f64::NEG_INFINITY,
        }]);

        let csv = to_csv_string(&series, Language::En.strings());
        assert!(csv.ends_with("2.0,,-inf\n"));

        let table = read(csv.as_bytes()).unwrap();
        let record = table.series.records()[0];
        assert_eq!(record.time, 2.0);
        assert!(record.prey.is_nan());
        assert_eq!(record.predator, f64::NEG_INFINITY);
    }

    #[test]
    fn tolerates_crlf_and_trailing_blank_lines() {
        let csv = "Time,Prey,Predators\r\n0.0,1.0,2.0\r\n\r\n";

        let table = read(csv.as_bytes()).unwrap();

        assert_eq!(table.series.len(), 1);
        assert_eq!(table.series.records()[0].predator, 2.0);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(read(&b""[..]), Err(CsvError::MissingHeader)));
    }

    #[test]
    fn rejects_unknown_header() {
        let error = read(&b"t,x,y\n0,1,2\n"[..]).unwrap_err();
        assert!(matches!(error, CsvError::UnknownHeader(header) if header == "t,x,y"));
    }

    #[test]
    fn reports_line_of_bad_row() {
        let csv = "Time,Prey,Predators\n0.0,1.0,2.0\n0.5,1.0\n";
        let error = read(csv.as_bytes()).unwrap_err();
        assert!(matches!(error, CsvError::FieldCount { line: 3, found: 2 }));

        let csv = "Time,Prey,Predators\n0.0,lots,2.0\n";
        let error = read(csv.as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "line 2: \"lots\" is not a number");
    }

    #[test]
    fn save_and_load_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        save(&series(), Language::Kk.strings(), &path).unwrap();
        let table = load(&path).unwrap();

        assert_eq!(table.language, Language::Kk);
        assert_eq!(table.series, series());
    }
}
