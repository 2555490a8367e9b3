extern crate proc_macro;

mod catalog;

use syn::{parse_macro_input, LitInt};

/// Expands to the full set of named component accessors of a vector with the given number of
/// components.
///
/// Must be invoked inside an `impl<T: Num> Vector<T, D>` block, where `D` matches the literal
/// passed to the macro. For every alias group (`xyzw`, `rgba`, `stpq`) and every ordered tuple of
/// one to four component indices, three methods are generated:
///
/// - `xy()` reads: a scalar for single letters, a [`Swizzle`] view otherwise.
/// - `xy_mut()` borrows mutably: `&mut T` for single letters, a [`SwizzleMut`] view otherwise.
/// - `set_xy(value)` writes the whole selection at once.
///
/// It also emits `SWIZZLES`, a table describing every accessor of arity two to four.
///
/// [`Swizzle`]: ../swizzle_math/swizzle/struct.Swizzle.html
/// [`SwizzleMut`]: ../swizzle_math/swizzle/struct.SwizzleMut.html
#[proc_macro]
pub fn swizzles(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let dim = parse_macro_input!(input as LitInt);
    catalog::swizzles(&dim)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
