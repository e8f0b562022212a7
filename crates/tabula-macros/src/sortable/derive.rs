//! Implementation of the `#[derive(Sortable)]` macro.
//!
//! This macro generates an implementation of the `Sortable` trait and
//! field name constants for type-safe query parameters.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result};

use super::attrs::{parse_sort_attrs, SortKind};

/// Main implementation of the Sortable derive macro.
pub fn sortable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Sortable cannot be derived for generic structs; implement it by hand",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Sortable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Sortable can only be derived for structs",
            ))
        }
    };

    let mut registrations: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let sort_attrs = parse_sort_attrs(&field.attrs)?;
        if sort_attrs.skip {
            continue;
        }
        // Unannotated fields are not sortable.
        let kind = match sort_attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let sort_name = sort_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string());
        if !seen.insert(sort_name.clone()) {
            return Err(Error::new(
                sort_attrs.span,
                format!("duplicate sort field name '{}'", sort_name),
            ));
        }

        let const_str = to_screaming_snake_case(&sort_name);
        let const_name: Ident = syn::parse_str(&const_str).map_err(|_| {
            Error::new(
                sort_attrs.span,
                format!(
                    "sort field name '{}' does not give a valid constant name ('{}')",
                    sort_name, const_str
                ),
            )
        })?;
        field_constants.push(quote! {
            /// Sort field name constant.
            pub const #const_name: &'static str = #sort_name;
        });

        let registration = match kind {
            SortKind::String => quote! {
                .string(#sort_name, |item: &Self| {
                    ::tabula_resource::SortText::sort_text(&item.#field_name)
                })
            },
            SortKind::Number => quote! {
                .numeric(#sort_name, |item: &Self| {
                    ::tabula_resource::SortNumber::sort_number(&item.#field_name)
                })
            },
            SortKind::Ord => quote! {
                .custom(#sort_name, |a: &Self, b: &Self| {
                    ::core::cmp::Ord::cmp(&a.#field_name, &b.#field_name)
                })
            },
        };
        registrations.push(registration);
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::tabula_resource::Sortable for #struct_name {
            fn sort_fields() -> ::tabula_resource::FieldRegistry<Self> {
                ::tabula_resource::FieldRegistry::new()
                    #(#registrations)*
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}
