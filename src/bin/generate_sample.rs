use anyhow::{Context, Result};

const MAX_N: u32 = 100;
/// Fast-growing functions are only tabulated up to here.
const LIMITED_N: u32 = 20;

type GrowthFn = fn(u32) -> f64;

fn factorial(n: u32) -> f64 {
    if n > LIMITED_N {
        return f64::NAN;
    }
    (2..=u64::from(n)).product::<u64>() as f64
}

fn cube(n: u32) -> f64 {
    f64::from(n).powi(3)
}

fn natural_log(n: u32) -> f64 {
    if n > 0 { f64::from(n).ln() } else { f64::NAN }
}

fn log_base2(n: u32) -> f64 {
    if n > 0 { f64::from(n).log2() } else { f64::NAN }
}

fn exponential(n: u32) -> f64 {
    if n <= LIMITED_N { f64::from(n).exp() } else { f64::NAN }
}

fn power_of_two(n: u32) -> f64 {
    if n <= LIMITED_N { 2f64.powi(n as i32) } else { f64::NAN }
}

fn ln_of_ln(n: u32) -> f64 {
    if n > 1 { f64::from(n).ln().ln() } else { f64::NAN }
}

fn lg_of_lg(n: u32) -> f64 {
    if n > 1 { f64::from(n).log2().log2() } else { f64::NAN }
}

fn n_log2(n: u32) -> f64 {
    if n > 0 { f64::from(n) * f64::from(n).log2() } else { 0.0 }
}

fn n_power_of_two(n: u32) -> f64 {
    if n <= LIMITED_N { f64::from(n) * 2f64.powi(n as i32) } else { f64::NAN }
}

const FUNCTIONS: &[(&str, GrowthFn)] = &[
    ("Factorial", factorial),
    ("Cube", cube),
    ("Natural Log (ln)", natural_log),
    ("Log Base 2 (lg)", log_base2),
    ("Exponential (e^n)", exponential),
    ("Power of 2 (2^n)", power_of_two),
    ("ln(ln(n))", ln_of_ln),
    ("lg(lg(n))", lg_of_lg),
    ("n*lg(n)", n_log2),
    ("n*2^n", n_power_of_two),
];

fn format_value(v: f64) -> String {
    if v.is_nan() { "N/A".to_string() } else { format!("{v:.2e}") }
}

fn main() -> Result<()> {
    let output_path = "output.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header = vec!["n"];
    header.extend(FUNCTIONS.iter().map(|(name, _)| *name));
    writer.write_record(&header)?;

    for n in 0..=MAX_N {
        let mut row = vec![n.to_string()];
        row.extend(FUNCTIONS.iter().map(|(_, f)| format_value(f(n))));
        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!(
        "Wrote {} functions over n = 0..={MAX_N} to {output_path}",
        FUNCTIONS.len()
    );
    Ok(())
}
