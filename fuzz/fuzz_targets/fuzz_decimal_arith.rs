#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use picalc_core::context::{Context, Rounding};
use picalc_core::decimal::Decimal;

const MODES: [Rounding; 3] = [Rounding::HalfEven, Rounding::HalfUp, Rounding::Down];

fn operand(bytes: &[u8], exponent: u8) -> Decimal {
    let coefficient = BigInt::from_signed_bytes_le(bytes);
    Decimal::new(coefficient, i64::from(exponent as i8))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let precision = u32::from(data[0]) % 40 + 1;
    let rounding = MODES[usize::from(data[1]) % MODES.len()];
    let ctx = Context::new(precision).unwrap().with_rounding(rounding);

    let split = 4 + (data.len() - 4) / 2;
    let a = operand(&data[4..split], data[2]);
    let b = operand(&data[split..], data[3]);

    // Every context operation rounds the exact result exactly once
    assert_eq!(ctx.add(&a, &b), ctx.round(&a.exact_add(&b)));
    assert_eq!(ctx.sub(&a, &b), ctx.round(&a.exact_sub(&b)));
    assert_eq!(ctx.mul(&a, &b), ctx.round(&a.exact_mul(&b)));
    assert!(ctx.round(&a).digits() <= u64::from(precision));

    match ctx.div(&a, &b) {
        Ok(q) => assert!(q.digits() <= u64::from(precision)),
        Err(_) => assert!(b.is_zero()),
    }

    // Display output parses back to the same value
    let text = a.to_string();
    let parsed: Decimal = text.parse().unwrap();
    assert_eq!(parsed, a);
});
