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

#[cfg(test)]
#[allow(dead_code)]
pub mod test_tuning {

    use pid_tuning::model::{ProcessModel, ProcessModelBuilder};

    /// The plant of the worked Ziegler-Nichols and Cohen-Coon examples: K = 1.25, τ = 4, θ = 0.9
    pub fn make_worked_example_plant() -> ProcessModel<f64> {
        ProcessModel::new(1.25, 4.0, 0.9).unwrap()
    }

    /// The plant used for most reference values: K = 1, τ = 10, θ = 3, i.e. θ/τ = 0.3
    pub fn make_reference_plant() -> ProcessModel<f64> {
        ProcessModelBuilder::default()
            .gain(1.0)
            .time_constant(10.0)
            .dead_time(3.0)
            .build()
            .unwrap()
    }

    /// A plant without dead time, outside the domain of most rules
    pub fn make_undelayed_plant() -> ProcessModel<f64> {
        ProcessModel::new(2.0, 5.0, 0.0).unwrap()
    }
}
