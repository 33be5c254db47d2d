use anyhow::Result;
use greater_number::{CompareError, Comparison, NumberComparator, Operand, Settings};
use std::io::Cursor;

fn run_with(settings: Settings, input: &str) -> (greater_number::Result<Comparison>, String) {
    let comparator = NumberComparator::new(settings);
    let mut output = Vec::new();
    let result = comparator.run(Cursor::new(input.as_bytes().to_vec()), &mut output);
    (result, String::from_utf8(output).unwrap())
}

fn run(input: &str) -> (greater_number::Result<Comparison>, String) {
    run_with(Settings::default(), input)
}

#[test]
fn test_first_greater() -> Result<()> {
    let (result, output) = run("5\n3\n");
    result?;
    assert!(output.contains("5 is greater than 3"));
    Ok(())
}

#[test]
fn test_second_greater() -> Result<()> {
    let (result, output) = run("3\n5\n");
    result?;
    assert!(output.contains("5 is greater than 3"));
    Ok(())
}

#[test]
fn test_equal_numbers() -> Result<()> {
    let (result, output) = run("7\n7\n");
    assert_eq!(result?, Comparison::Equal(7));
    assert!(output.contains("Both numbers are equal: 7 = 7"));
    Ok(())
}

#[test]
fn test_full_transcript() -> Result<()> {
    let (result, output) = run("-4\n10\n\n");
    result?;
    assert_eq!(
        output,
        "Enter first number: Enter second number: 10 is greater than -4\nPress any key to continue..."
    );
    Ok(())
}

#[test]
fn test_larger_always_reported_first() {
    let values = [i64::MIN, -1000, -1, 0, 1, 42, i64::MAX];
    for &a in &values {
        for &b in &values {
            let (result, output) = run(&format!("{}\n{}\n", a, b));
            let comparison = result.unwrap();
            if a == b {
                assert!(output.contains(&format!("Both numbers are equal: {} = {}", a, a)));
            } else {
                let (larger, smaller) = if a > b { (a, b) } else { (b, a) };
                assert_eq!(comparison, Comparison::Greater { larger, smaller });
                assert!(output.contains(&format!("{} is greater than {}", larger, smaller)));
            }
        }
    }
}

#[test]
fn test_numbers_on_one_line() -> Result<()> {
    let (result, _) = run("  12   9  \nok\n");
    assert_eq!(
        result?,
        Comparison::Greater {
            larger: 12,
            smaller: 9
        }
    );
    Ok(())
}

#[test]
fn test_malformed_first_number() {
    let (result, output) = run("abc\n3\n");
    match result {
        Err(CompareError::InputFormatError { operand, input, .. }) => {
            assert_eq!(operand, Operand::First);
            assert_eq!(input, "abc");
        }
        other => panic!("expected InputFormatError, got {:?}", other),
    }
    assert!(!output.contains("greater"));
    assert!(!output.contains("Press any key"));
}

#[test]
fn test_malformed_second_number() {
    let (result, output) = run("3\n4.5\n");
    assert!(matches!(
        result,
        Err(CompareError::InputFormatError {
            operand: Operand::Second,
            ..
        })
    ));
    assert_eq!(output, "Enter first number: Enter second number: ");
}

#[test]
fn test_empty_input() {
    let (result, _) = run("");
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.user_friendly_message(), "No first number was entered");
}

#[test]
fn test_no_pause_skips_prompt() -> Result<()> {
    let settings = Settings {
        pause: false,
        ..Settings::default()
    };
    let (result, output) = run_with(settings, "1\n2\n");
    result?;
    assert!(output.ends_with("2 is greater than 1\n"));
    assert!(!output.contains("Press any key"));
    Ok(())
}

#[test]
fn test_non_utf8_number_is_input_format_error() {
    let comparator = NumberComparator::new(Settings::default());
    let mut output = Vec::new();
    let result = comparator.run(Cursor::new(b"\xff\xfe\n3\n".to_vec()), &mut output);

    match result {
        Err(err @ CompareError::InputFormatError { .. }) => {
            assert_eq!(err.exit_code(), 1);
        }
        other => panic!("expected InputFormatError, got {:?}", other),
    }
    assert_eq!(String::from_utf8(output).unwrap(), "Enter first number: ");
}

#[test]
fn test_non_utf8_acknowledgment_still_succeeds() -> Result<()> {
    let comparator = NumberComparator::new(Settings::default());
    let mut output = Vec::new();
    let result = comparator.run(Cursor::new(b"4\n9\n\xff\n".to_vec()), &mut output);

    assert_eq!(
        result?,
        Comparison::Greater {
            larger: 9,
            smaller: 4
        }
    );
    assert!(String::from_utf8(output)?.ends_with("Press any key to continue..."));
    Ok(())
}
