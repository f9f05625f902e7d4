//! Prints the gains every tuning rule recommends for a process model given on the command line
//! Usage: cargo run --example tuning_table -- <gain> <time constant> <dead time> [P|PI|PID]
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use pid_tuning::{ControllerType, ProcessModel, TuningError, TuningRule};

/// Reads a numeric argument, falling back to `default` only when it is absent
fn parse_arg(args: &[String], index: usize, default: f64) -> Result<f64, String> {
    args.get(index).map_or(Ok(default), |it| {
        it.parse()
            .map_err(|e| format!("argument {} ({:?}) is not a number: {}", index, it, e))
    })
}

fn parse_arg_or_exit(args: &[String], index: usize, default: f64) -> f64 {
    parse_arg(args, index, default).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(2);
    })
}

pub fn main() {
    let args: Vec<String> = std::env::args().collect();

    let gain = parse_arg_or_exit(&args, 1, 1.25);
    let time_constant = parse_arg_or_exit(&args, 2, 4.0);
    let dead_time = parse_arg_or_exit(&args, 3, 0.9);
    let controller = args
        .get(4)
        .map(|it| it.parse::<ControllerType>())
        .unwrap_or(Ok(ControllerType::PID));

    let controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let model = match ProcessModel::new(gain, time_constant, dead_time) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    println!(
        "K = {}, tau = {}, theta = {} (theta/tau = {:.3}), {} controller",
        gain,
        time_constant,
        dead_time,
        model.dead_time_ratio(),
        controller
    );
    println!(
        "{:<40} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "rule", "Kp", "Ki", "Kd", "Ti", "Td"
    );

    for rule in TuningRule::ALL {
        match rule.evaluate(&model, controller) {
            Ok(gains) => println!(
                "{:<40} {:>10.4} {:>10.4} {:>10.4} {:>10} {:>10}",
                rule.citation(),
                gains.kp(),
                gains.ki(),
                gains.kd(),
                gains
                    .integral_time()
                    .map_or_else(|| "-".to_string(), |it| format!("{:.4}", it)),
                gains
                    .derivative_time()
                    .map_or_else(|| "-".to_string(), |it| format!("{:.4}", it)),
            ),
            Err(TuningError::UnsupportedControllerType { .. }) => {}
            Err(e) => println!("{:<40} {}", rule.citation(), e),
        }
    }
}
