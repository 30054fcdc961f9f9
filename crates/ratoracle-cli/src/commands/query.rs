use crate::support::{exit_with, interval_or_exit, print_json, rational_or_exit, yes_no};
use ratoracle_kernel::from_interval;
use serde_json::json;

pub fn run(
    low: String,
    high: String,
    target_low: String,
    target_high: String,
    delta: String,
    json_output: bool,
) {
    let mut oracle = from_interval(interval_or_exit(&low, &high, "oracle"));
    let target = interval_or_exit(&target_low, &target_high, "target");
    let delta = rational_or_exit(&delta, "delta");

    let answer = oracle
        .query(&target, &delta)
        .unwrap_or_else(|e| exit_with(e));

    if json_output {
        print_json(&json!({
            "target": target,
            "delta": delta.to_string(),
            "answer": answer,
            "yes": oracle.yes(),
        }));
    } else {
        println!("ratoracle query {target} --delta {delta}");
        println!("  Answer: {}", yes_no(answer.ans));
        println!("  Judged from: {}", answer.cd);
        println!("  Yes: {}", oracle.yes());
    }
}
