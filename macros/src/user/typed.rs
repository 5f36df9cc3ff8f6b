use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

use crate::common::parse_method_attrs;

/// #[derive(Typed)] implements `::tola_equaller::Typed`.
///
/// Type parameters gain a `'static` bound (`Typed: Any`). Lifetime
/// parameters are rejected for the same reason.
pub fn expand_derive_typed(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let methods = parse_method_attrs(&input.attrs)?;

    for param in input.generics.params.iter_mut() {
        match param {
            GenericParam::Type(ty) => ty.bounds.push(parse_quote!('static)),
            GenericParam::Lifetime(lt) => {
                return Err(syn::Error::new_spanned(
                    &lt.lifetime,
                    "#[derive(Typed)] requires a 'static type; remove the lifetime parameter",
                ));
            }
            GenericParam::Const(_) => {}
        }
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let methods_impl = if methods.is_empty() {
        quote! {}
    } else {
        let names: Vec<_> = methods.iter().map(|m| m.name_str()).collect();
        let funcs: Vec<_> = methods.iter().map(|m| &m.func).collect();
        quote! {
            fn method_set() -> ::tola_equaller::MethodSet {
                ::tola_equaller::MethodSet::new()
                    #( .with(#names, #funcs) )*
            }

            fn method_by_name(
                name: &str,
            ) -> ::core::option::Option<::tola_equaller::Method> {
                match name {
                    #( #names => ::core::option::Option::Some(
                        ::tola_equaller::IntoMethod::into_method(#funcs, #names),
                    ), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::tola_equaller::Typed for #ident #ty_generics #where_clause {
            #methods_impl
        }
    })
}
