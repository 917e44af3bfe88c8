use crate::errors;
use serde::Serialize;

/// Calculate the mean of a slice of f64 values.
///  - `numbers` is a reference to a slice of f64 values.
///  - Returns the mean of `numbers`.
///
/// # Examples
///
/// ```rust
/// let numbers = vec![1.0, 1.5, 2.0, 2.5, 3.0];
/// let mn = relay::utils::mean(&numbers);
/// assert_eq!(2.0, mn);
/// ```
pub fn mean(numbers: &[f64]) -> f64 {
    let sum: f64 = numbers.iter().sum();

    sum as f64 / numbers.len() as f64
}

/// Calculate the median of a slice of f64 values.
///  - `numbers` is a reference to a slice of f64 values in ascending order.
///  - Returns the median of `numbers`.
///
/// # Examples
///
/// ```rust
/// let numbers = vec![1.0, 3.0, 7.0, 10.0];
/// let med = relay::utils::median(&numbers);
/// assert_eq!(5.0, med);
/// ```
pub fn median(numbers: &[f64]) -> f64 {
    let len = numbers.len();
    let mid = len / 2;
    if len % 2 == 0 {
        mean(&numbers[(mid - 1)..(mid + 1)].to_vec())
    } else {
        numbers[mid]
    }
}

/// Write statistical results to csv file.
pub fn record<T: Serialize>(rec: &mut Vec<T>, path: &str) -> Result<(), errors::RelayError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for i in rec {
        wtr.serialize(i)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Row {
        speed: f64,
        prob: f64,
    }

    #[test]
    fn record_writes_rows() {
        let path = std::env::temp_dir().join("relay_record_test.csv");
        let path = path.to_str().unwrap();
        let mut rows = vec![
            Row {
                speed: 7.5,
                prob: 0.25,
            },
            Row {
                speed: 8.0,
                prob: 0.75,
            },
        ];
        record(&mut rows, path).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("speed,prob"));
        assert!(written.contains("8.0,0.75"));
    }
}
