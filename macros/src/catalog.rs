use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Error, LitInt, Result};

const ALIAS_GROUPS: [(&str, [char; 4]); 3] = [
    ("Position", ['x', 'y', 'z', 'w']),
    ("Color", ['r', 'g', 'b', 'a']),
    ("Texture", ['s', 't', 'p', 'q']),
];

const MAX_ARITY: usize = 4;

pub(crate) fn swizzles(dim_lit: &LitInt) -> Result<TokenStream> {
    let dim: usize = dim_lit.base10_parse()?;
    if !(2..=4).contains(&dim) {
        return Err(Error::new(
            dim_lit.span(),
            format!("vectors have 2, 3 or 4 components, got {dim}"),
        ));
    }

    let mut accessors = Vec::new();
    let mut table = Vec::new();

    for (group, letters) in ALIAS_GROUPS {
        let group = format_ident!("{group}");
        for arity in 1..=MAX_ARITY {
            for indices in index_tuples(dim, arity) {
                let name: String = indices.iter().map(|&i| letters[i]).collect();
                if arity == 1 {
                    accessors.push(component_accessor(&name, indices[0]));
                } else {
                    accessors.push(swizzle_accessor(&name, &indices, dim));
                    let index_lits = indices.iter().map(|&i| Literal::usize_unsuffixed(i));
                    table.push(quote! {
                        crate::swizzle::catalog::Accessor {
                            name: #name,
                            group: crate::swizzle::catalog::AliasGroup::#group,
                            indices: &[#(#index_lits),*],
                        }
                    });
                }
            }
        }
    }

    Ok(quote! {
        /// Every swizzle accessor of arity 2 to 4 this vector exposes, under all three alias
        /// groups, in generation order.
        pub const SWIZZLES: &'static [crate::swizzle::catalog::Accessor] = &[#(#table),*];

        #(#accessors)*
    })
}

/// All ordered `arity`-tuples over `0..dim`, repetition allowed, in lexicographic order.
fn index_tuples(dim: usize, arity: usize) -> impl Iterator<Item = Vec<usize>> {
    let count = dim.pow(arity as u32);
    (0..count).map(move |mut n| {
        let mut tuple = vec![0; arity];
        for slot in tuple.iter_mut().rev() {
            *slot = n % dim;
            n /= dim;
        }
        tuple
    })
}

fn component_accessor(name: &str, index: usize) -> TokenStream {
    let get = format_ident!("{name}");
    let get_mut = format_ident!("{name}_mut");
    let set = format_ident!("set_{name}");
    let index = Literal::usize_unsuffixed(index);
    let doc = format!("Component `{name}` (index {index}).");

    quote! {
        #[doc = #doc]
        #[inline(always)]
        pub fn #get(&self) -> T {
            self.0[#index]
        }

        #[inline(always)]
        pub fn #get_mut(&mut self) -> &mut T {
            &mut self.0[#index]
        }

        #[inline(always)]
        pub fn #set(&mut self, value: T) {
            self.0[#index] = value;
        }
    }
}

fn swizzle_accessor(name: &str, indices: &[usize], dim: usize) -> TokenStream {
    let get = format_ident!("{name}");
    let get_mut = format_ident!("{name}_mut");
    let set = format_ident!("set_{name}");
    let dim = Literal::usize_unsuffixed(dim);
    let arity = Literal::usize_unsuffixed(indices.len());
    let index_lits: Vec<_> = indices.iter().map(|&i| Literal::usize_unsuffixed(i)).collect();
    let doc = format!("Swizzle view over components `{name}` (indices {indices:?}).");

    quote! {
        #[doc = #doc]
        #[inline(always)]
        pub fn #get(&self) -> crate::swizzle::Swizzle<'_, T, #dim, #arity> {
            crate::swizzle::Swizzle::bind(self, [#(#index_lits),*])
        }

        #[inline(always)]
        pub fn #get_mut(&mut self) -> crate::swizzle::SwizzleMut<'_, T, #dim, #arity> {
            crate::swizzle::SwizzleMut::bind(self, [#(#index_lits),*])
        }

        #[inline(always)]
        pub fn #set(&mut self, value: impl crate::swizzle::Components<T, #arity>) {
            self.#get_mut().write(value);
        }
    }
}
