/*
 * // Copyright (c) Radzivon Bartoshyk 8/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::process::exit;

#[derive(Debug, Clone)]
pub(crate) struct Options {
    pub(crate) space: String,
    pub(crate) output: String,
    /// Planckian radiator temperature; `None` means equal-energy illuminant.
    pub(crate) temperature: Option<f64>,
    pub(crate) lambda_start: f64,
    pub(crate) lambda_end: f64,
    pub(crate) lambda_step: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            space: "lab".to_string(),
            output: "gamut.obj".to_string(),
            temperature: None,
            lambda_start: 380.,
            lambda_end: 780.,
            lambda_step: 5.,
        }
    }
}

const USAGE: &str = "usage: app [--space xyz|srgb-linear|lab|luv|xyy|oklab] \
[--illuminant e|blackbody] [--temperature K] [--output FILE.obj] \
[--start NM] [--end NM] [--step NM]";

pub(crate) fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--space" => options.space = expect_value(&mut args, &flag),
            "--output" => options.output = expect_value(&mut args, &flag),
            "--illuminant" => match expect_value(&mut args, &flag).as_str() {
                "e" => options.temperature = None,
                "blackbody" => {
                    options.temperature.get_or_insert(6500.);
                }
                other => fail(&format!("unknown illuminant '{}'", other)),
            },
            "--temperature" => {
                options.temperature = Some(expect_number(&mut args, &flag));
            }
            "--start" => options.lambda_start = expect_number(&mut args, &flag),
            "--end" => options.lambda_end = expect_number(&mut args, &flag),
            "--step" => options.lambda_step = expect_number(&mut args, &flag),
            "--help" | "-h" => {
                println!("{}", USAGE);
                exit(0);
            }
            other => fail(&format!("unknown flag '{}'", other)),
        }
    }
    if options.lambda_step <= 0. || options.lambda_end <= options.lambda_start {
        fail("wavelength range must be increasing with a positive step");
    }
    options
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => fail(&format!("{} expects a value", flag)),
    }
}

fn expect_number(args: &mut impl Iterator<Item = String>, flag: &str) -> f64 {
    let raw = expect_value(args, flag);
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => fail(&format!("{} expects a number, got '{}'", flag, raw)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    exit(1);
}
