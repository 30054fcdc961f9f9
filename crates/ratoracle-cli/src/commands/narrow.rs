use crate::support::{exit_with, interval_or_exit, print_json, rational_or_exit, yes_no};
use num_traits::Signed;
use ratoracle_kernel::{
    KernelConfig, bisect_with, from_interval, narrow_with_cutter_limited, weighted_cutter,
};
use serde_json::json;

/// Narrow an interval oracle. Without a weight this is plain bisection.
pub fn run(
    config: &KernelConfig,
    low: String,
    high: String,
    precision: String,
    weight: Option<String>,
    json_output: bool,
) {
    let mut oracle = from_interval(interval_or_exit(&low, &high, "oracle"));
    let start = oracle.yes().clone();
    let precision = rational_or_exit(&precision, "precision");
    let weight = weight.map(|text| rational_or_exit(&text, "weight"));

    let narrowed = match &weight {
        Some(weight) => narrow_with_cutter_limited(
            &mut oracle,
            &precision,
            weighted_cutter(weight.clone()),
            &config.narrowing,
        ),
        None => bisect_with(&mut oracle, &precision, &config.narrowing),
    }
    .unwrap_or_else(|e| exit_with(e));
    let converged = narrowed.width() <= precision.abs();
    let strategy = match &weight {
        Some(weight) => format!("weighted {weight}"),
        None => "bisect".to_string(),
    };

    if json_output {
        print_json(&json!({
            "start": start,
            "precision": precision.to_string(),
            "strategy": strategy,
            "narrowed": narrowed,
            "width": narrowed.width().to_string(),
            "converged": converged,
        }));
    } else {
        println!("ratoracle narrow {start} --precision {precision} ({strategy})");
        println!("  Narrowed: {narrowed}");
        println!("  Width: {}", narrowed.width());
        println!("  Converged: {}", yes_no(converged));
    }
}
