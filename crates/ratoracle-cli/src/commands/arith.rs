use crate::cli::ArithOp;
use crate::support::{exit_with, interval_or_exit, print_json};
use ratoracle_kernel::{
    KernelConfig, TracingSink, add, divide_with, from_interval, multiply, subtract,
};
use serde_json::json;

pub struct Args {
    pub op: ArithOp,
    pub a: (String, String),
    pub b: (String, String),
    pub json: bool,
}

pub fn run(config: &KernelConfig, args: Args) {
    let a = from_interval(interval_or_exit(&args.a.0, &args.a.1, "first operand"));
    let b = from_interval(interval_or_exit(&args.b.0, &args.b.1, "second operand"));

    let result = match args.op {
        ArithOp::Add => add(&a, &b),
        ArithOp::Subtract => subtract(&a, &b),
        ArithOp::Multiply => multiply(&a, &b),
        ArithOp::Divide => divide_with(&a, &b.into_shared(), &config.division, &TracingSink)
            .unwrap_or_else(|e| exit_with(e)),
    };
    let yes = result.yes();

    if args.json {
        print_json(&json!({
            "op": args.op.as_str(),
            "yes": yes,
            "width": yes.width().to_string(),
        }));
    } else {
        println!("ratoracle arith {}", args.op.as_str());
        println!("  Yes: {yes}");
        println!("  Width: {}", yes.width());
    }
}
