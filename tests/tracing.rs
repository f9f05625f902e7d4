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


#![cfg(feature = "tracing")]

mod fixtures;
use fixtures::test_tuning;

use std::io;
use std::sync::{Arc, Mutex};

use pid_tuning::{ControllerType, TuningRule};
use tracing_subscriber::util::SubscriberInitExt;

/// Collects everything the fmt subscriber writes
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let result = {
        let _guard = subscriber.set_default();
        f()
    };
    (result, logs.contents())
}

mod test_evaluate_events {
    use super::test_tuning::{make_reference_plant, make_undelayed_plant};
    use super::*;

    #[test]
    fn test_success_emits_trace_event() {
        let model = make_reference_plant();
        let (result, logs) =
            capture(|| TuningRule::ZieglerNichols.evaluate(&model, ControllerType::PID));

        assert!(result.is_ok());
        assert!(logs.contains("TRACE"), "{}", logs);
        assert!(logs.contains("tuning rule evaluated"), "{}", logs);
        assert!(logs.contains("ziegler_nichols"), "{}", logs);
        assert!(!logs.contains("DEBUG"), "{}", logs);
    }

    #[test]
    fn test_unsupported_controller_emits_debug_event() {
        let model = make_reference_plant();
        let (result, logs) = capture(|| TuningRule::Sakai.evaluate(&model, ControllerType::P));

        assert!(result.is_err());
        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(logs.contains("tuning rule rejected its inputs"), "{}", logs);
        assert!(
            logs.contains("tuning rule `sakai` does not support P controllers"),
            "{}",
            logs
        );
    }

    #[test]
    fn test_invalid_model_emits_debug_event() {
        let model = make_undelayed_plant();
        let (result, logs) = capture(|| TuningRule::Parr.evaluate(&model, ControllerType::PI));

        assert!(result.is_err());
        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(
            logs.contains("invalid dead time: must be greater than zero for this rule"),
            "{}",
            logs
        );
    }
}
