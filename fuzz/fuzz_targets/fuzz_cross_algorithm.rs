#![no_main]

use libfuzzer_sys::fuzz_target;

use picalc_core::context::Context;
use picalc_core::decimal::Decimal;
use picalc_core::leibniz::leibniz_fixed;
use picalc_core::leibniz_rational::leibniz_rational;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First 2 bytes as n, capped at 2000 for speed; third byte as precision
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000 + 1;
    let precision = u32::from(data[2]) % 60 + 10;
    let ctx = Context::new(precision).unwrap();

    let fixed = leibniz_fixed(n, &ctx).unwrap();
    let exact = ctx.from_rational(&leibniz_rational(n).unwrap()).unwrap();

    // Each of the n additions plus the final scaling rounds once
    let diff = fixed.exact_sub(&exact).abs();
    let bound = Decimal::new(4 * (n + 2), 1 - i64::from(precision));
    assert!(diff <= bound, "n={n} precision={precision}: fixed={fixed} exact={exact}");
});
