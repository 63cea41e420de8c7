//! Derived-column construction over raw insurance records.
//!
//! Every function adds columns and never removes or rewrites existing ones.
//! A missing source column defaults the derived indicator to zero rather
//! than failing the run; a non-numeric cell is treated as missing for that
//! row only.

use medcast_core::{Frame, Result, Value};

/// BMI bucket boundaries: `<18.5`, `<25`, `<30`, else obese.
///
/// Half-open at the upper boundary, so `bmi = 25.0` is already overweight
/// and `bmi = 30.0` is already obese.
#[must_use]
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}

/// Age bucket boundaries: `<18`, `<30`, `<45`, `<60`, else senior.
#[must_use]
pub fn age_group(age: f64) -> &'static str {
    if age < 18.0 {
        "child"
    } else if age < 30.0 {
        "young_adult"
    } else if age < 45.0 {
        "adult"
    } else if age < 60.0 {
        "middle_aged"
    } else {
        "senior"
    }
}

/// Add the `bmi_category` column. Skipped entirely when `bmi` is absent;
/// rows with a non-numeric bmi get a null category.
pub fn add_bmi_category(frame: &mut Frame) -> Result<()> {
    let Some(bmi) = frame.f64_column("bmi") else {
        return Ok(());
    };
    let categories: Vec<Value> = bmi
        .into_iter()
        .map(|b| b.map_or(Value::Null, |b| Value::from(bmi_category(b))))
        .collect();
    frame.set_column("bmi_category", categories)
}

/// Add the `age_group` column. Skipped entirely when `age` is absent.
pub fn add_demographic_features(frame: &mut Frame) -> Result<()> {
    let Some(age) = frame.f64_column("age") else {
        return Ok(());
    };
    let groups: Vec<Value> = age
        .into_iter()
        .map(|a| a.map_or(Value::Null, |a| Value::from(age_group(a))))
        .collect();
    frame.set_column("age_group", groups)
}

/// Add the binary risk indicators: `is_smoker`, `is_obese`,
/// `has_children`, `senior`. Each defaults to 0 when its source column
/// is missing.
pub fn add_risk_indicators(frame: &mut Frame) -> Result<()> {
    let n = frame.n_rows();

    let is_smoker: Vec<Value> = match frame.column("smoker") {
        Some(col) => col.iter().map(smoker_indicator).collect(),
        None => vec![Value::Int(0); n],
    };
    frame.set_column("is_smoker", is_smoker)?;

    let is_obese = numeric_indicator(frame, "bmi", |bmi| bmi >= 30.0);
    frame.set_column("is_obese", is_obese)?;

    let has_children = numeric_indicator(frame, "children", |c| c > 0.0);
    frame.set_column("has_children", has_children)?;

    let senior = numeric_indicator(frame, "age", |a| a >= 60.0);
    frame.set_column("senior", senior)?;

    Ok(())
}

/// `smoker` may arrive raw (`"yes"`/`"no"`) or already binary-encoded;
/// numeric cells pass through as a 0/1 indicator.
fn smoker_indicator(cell: &Value) -> Value {
    match cell {
        Value::Str(s) => Value::Int(i64::from(s == "yes")),
        _ => match cell.as_f64() {
            Some(v) => Value::Int(i64::from(v != 0.0)),
            None => Value::Int(0),
        },
    }
}

fn numeric_indicator(frame: &Frame, source: &str, predicate: impl Fn(f64) -> bool) -> Vec<Value> {
    match frame.f64_column(source) {
        Some(col) => col
            .into_iter()
            .map(|v| Value::Int(i64::from(v.is_some_and(&predicate))))
            .collect(),
        None => vec![Value::Int(0); frame.n_rows()],
    }
}

/// The full derivation pass: bmi category, risk indicators, age group.
pub fn build_feature_pipeline(frame: &mut Frame) -> Result<()> {
    add_bmi_category(frame)?;
    add_risk_indicators(frame)?;
    add_demographic_features(frame)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcast_core::io;

    const SAMPLE: &str = "age,sex,bmi,children,smoker,region,charges\n\
        25,female,22,0,yes,southwest,2000\n\
        40,male,31,2,no,southeast,5000\n\
        70,male,28,0,no,northwest,9000\n";

    #[test]
    fn test_bmi_category_partition() {
        // Every bmi maps to exactly one bucket; boundaries are half-open.
        assert_eq!(bmi_category(12.0), "underweight");
        assert_eq!(bmi_category(18.5), "normal");
        assert_eq!(bmi_category(24.999), "normal");
        assert_eq!(bmi_category(25.0), "overweight");
        assert_eq!(bmi_category(29.999), "overweight");
        assert_eq!(bmi_category(30.0), "obese");
        assert_eq!(bmi_category(55.0), "obese");
    }

    #[test]
    fn test_age_group_monotonic() {
        let ages = [0.0, 17.0, 18.0, 29.0, 30.0, 44.0, 45.0, 59.0, 60.0, 95.0];
        let order = ["child", "young_adult", "adult", "middle_aged", "senior"];
        let mut last = 0;
        for age in ages {
            let rank = order.iter().position(|g| *g == age_group(age)).unwrap();
            assert!(rank >= last, "age_group must be monotonic in age");
            last = rank;
        }
        assert_eq!(age_group(17.999), "child");
        assert_eq!(age_group(18.0), "young_adult");
        assert_eq!(age_group(60.0), "senior");
    }

    #[test]
    fn test_full_pipeline_columns() {
        let mut frame = io::read_csv_from(SAMPLE.as_bytes()).unwrap();
        build_feature_pipeline(&mut frame).unwrap();

        let cats: Vec<_> = frame
            .column("bmi_category")
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(cats, ["normal", "obese", "overweight"]);

        let groups: Vec<_> = frame
            .column("age_group")
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(groups, ["young_adult", "adult", "senior"]);

        assert_eq!(
            frame.column("is_smoker").unwrap(),
            &[Value::Int(1), Value::Int(0), Value::Int(0)]
        );
        assert_eq!(
            frame.column("is_obese").unwrap(),
            &[Value::Int(0), Value::Int(1), Value::Int(0)]
        );
        assert_eq!(
            frame.column("senior").unwrap(),
            &[Value::Int(0), Value::Int(0), Value::Int(1)]
        );
        assert_eq!(
            frame.column("has_children").unwrap(),
            &[Value::Int(0), Value::Int(1), Value::Int(0)]
        );
    }

    #[test]
    fn test_missing_smoker_defaults_to_zero() {
        let mut frame = io::read_csv_from("age,bmi\n30,25\n".as_bytes()).unwrap();
        add_risk_indicators(&mut frame).unwrap();
        assert_eq!(frame.column("is_smoker").unwrap(), &[Value::Int(0)]);
    }

    #[test]
    fn test_pre_encoded_smoker_passes_through() {
        let mut frame = io::read_csv_from("smoker\n1\n0\n".as_bytes()).unwrap();
        add_risk_indicators(&mut frame).unwrap();
        assert_eq!(
            frame.column("is_smoker").unwrap(),
            &[Value::Int(1), Value::Int(0)]
        );
    }

    #[test]
    fn test_missing_bmi_skips_category_but_zeroes_indicator() {
        let mut frame = io::read_csv_from("age\n50\n".as_bytes()).unwrap();
        build_feature_pipeline(&mut frame).unwrap();
        assert!(!frame.contains("bmi_category"));
        assert_eq!(frame.column("is_obese").unwrap(), &[Value::Int(0)]);
    }
}
