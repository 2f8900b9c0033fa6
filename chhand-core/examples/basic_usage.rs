//! Basic usage example for the meter engine

use chhand_core::{scan_matras, validate, DohaValidator, MeterError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let kabir = "बड़ा भया तो क्या भया, जैसे पेड़ खजूर |\n\
                 पंथी को छाया नहीं, फल लागे अति दूर ||";

    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let verdict = validate(kabir);
    println!("{}", verdict.report);
    println!("Valid: {}\n", verdict.is_valid);

    // Method 2: Structured analysis
    println!("=== Method 2: Structured Analysis ===");
    let validator = DohaValidator::new();
    let analysis = validator.analyze(kabir)?;
    for charan in &analysis.charans {
        println!(
            "Charan {} carries {} of {} matras over {} syllables",
            charan.number,
            charan.matras,
            charan.expected,
            charan.aksharas.len()
        );
    }

    // Method 3: Weighing a single line
    println!("\n=== Method 3: Syllable Weights ===");
    for wa in scan_matras("जैसे पेड़ खजूर") {
        println!("  {} -> {}", wa.akshara, wa.weight.matras());
    }

    // Method 4: Structural failures are errors, not verdicts
    println!("\n=== Method 4: Error Handling ===");
    match validator.analyze("सिर्फ़ एक पंक्ति") {
        Err(MeterError::StructuralSplit { found }) => {
            println!("Could not form a Doha: {found} fragment(s)");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }

    Ok(())
}
