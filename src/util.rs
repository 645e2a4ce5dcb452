//! This is an internal module that contains utility functionality used by other modules.

/// Spin while `$cond` holds, returning `Err($err)` once the iteration bound is exceeded.
///
/// `max: n` gives the iteration bound. An optional block is run on every iteration.
///
/// Example: `bounded_loop!(regs.busy(), Error::RegisterUnchanged, max: 1_000);`
macro_rules! bounded_loop {
    ($cond:expr, $err:expr, max: $max:expr, $on_iter:block) => {{
        let max: u32 = $max;
        let mut i: u32 = 0;
        while $cond {
            $on_iter
            i += 1;
            if i >= max {
                return Err($err);
            }
        }
    }};
    ($cond:expr, $err:expr, max: $max:expr) => {
        bounded_loop!($cond, $err, max: $max, {})
    };
}

pub(crate) use bounded_loop;
