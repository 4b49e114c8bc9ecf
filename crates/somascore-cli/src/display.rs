//! Card rendering for the submitted form and the prediction result.

use somascore_core::RawInput;
use somascore_core::schema::EXPECTED_COLUMNS;
use somascore_model::Prediction;

/// Print the submitted form as a vertical card grouped by section.
pub fn print_input_card(input: &RawInput) {
    println!("=== Submitted data ===");
    println!();

    println!("Personal");
    row("age (years)", input.age);
    row("height (m)", input.height_m);
    row("weight (kg)", input.weight_kg);
    row("gender", &input.gender);
    println!();

    println!("Diet");
    row("high-calorie food", &input.favc);
    row("vegetable frequency", input.fcvc);
    row("meals per day", input.ncp);
    row("snacking", &input.caec);
    row("water intake (l)", input.ch2o);
    row("alcohol", &input.calc);
    row("calorie tracking", &input.scc);
    println!();

    println!("Lifestyle");
    row("smoker", &input.smoke);
    row("activity frequency", input.faf);
    row("screen time (h)", input.tue);
    row("transportation", &input.mtrans);
    row("family history", &input.family_history);
    println!();
}

/// Print the assembled encoded record in training column order.
pub fn print_encoded_row(values: &[f64]) {
    println!("Encoded record");
    for (name, value) in EXPECTED_COLUMNS.iter().zip(values) {
        println!("  {:<32} {}", name, value);
    }
    println!();
}

/// Print the resolved category.
pub fn print_prediction(prediction: &Prediction) {
    println!("Predicted obesity category: {}", prediction.label());
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<26} {}", label, value);
}
