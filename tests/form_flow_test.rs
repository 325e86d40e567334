use anyhow::Result;
use inr_dose::{DosageReport, DoseError, DoseForm, OutputFormat, Settings};

#[test]
fn test_form_to_json_report() -> Result<()> {
    let mut form = DoseForm::new();
    form.set_inr("1.8")?;
    form.set_current_weekly_dose("35")?;

    let adjustment = form.calculate()?;
    assert_eq!(form.new_weekly_dose(), Some("38.50"));

    let report = DosageReport::from_adjustment(&adjustment, &Settings::default());
    let value: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;

    assert_eq!(value["new_weekly_dose"], "38.50");
    assert_eq!(value["band"], "slightly_low");
    assert_eq!(
        value["rationale"],
        "INR 1.8 is below the 2.0-3.0 target range: increase weekly dose by 10%"
    );
    assert!(value["disclaimer"].is_string());
    Ok(())
}

#[test]
fn test_signs_and_letters_are_rejected_while_typing() {
    let mut form = DoseForm::new();

    for text in ["-1", "1e2", "abc", "1.2.3"] {
        let err = form.set_current_weekly_dose(text).unwrap_err();
        assert!(matches!(err, DoseError::InputFormatError { .. }), "{}", text);
    }

    assert_eq!(form.current_weekly_dose(), "");
    assert_eq!(
        form.error(),
        Some("Please enter a valid number for Current Weekly Dose.")
    );
}

#[test]
fn test_recalculate_after_fixing_input() -> Result<()> {
    let mut form = DoseForm::new();
    form.set_inr("0")?;
    form.set_current_weekly_dose("35")?;
    assert!(form.calculate().is_err());
    assert!(form.error().is_some());

    form.set_inr("4")?;
    assert_eq!(form.error(), None);

    form.calculate()?;
    assert_eq!(form.new_weekly_dose(), Some("28.00"));
    Ok(())
}

#[test]
fn test_trailing_point_is_accepted() -> Result<()> {
    let mut form = DoseForm::new();
    form.set_inr("2.")?;
    form.set_current_weekly_dose(".5")?;

    form.calculate()?;
    assert_eq!(form.new_weekly_dose(), Some("0.50"));
    Ok(())
}
