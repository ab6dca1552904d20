//! Derive macro for `postboard_core::validation::Fields`.
//!
//! Exposes every named field of a struct to the validation engine, in
//! declaration order. Field names default to the Rust identifier and can be
//! overridden with `#[field(name = "...")]`; `#[field(skip)]` hides a field.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive `postboard_core::validation::Fields` for a struct with named fields.
#[proc_macro_derive(Fields, attributes(field))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_fields(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_fields(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Fields can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Fields requires named fields",
            ));
        }
    };

    let mut exposed: Vec<(String, &Ident)> = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(name) = parse_field_attrs(&field.attrs, ident)? else {
            continue;
        };
        if exposed.iter().any(|(existing, _)| *existing == name) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate field name `{name}`"),
            ));
        }
        exposed.push((name, ident));
    }

    let names: Vec<LitStr> = exposed
        .iter()
        .map(|(name, _)| LitStr::new(name, proc_macro2::Span::call_site()))
        .collect();
    let arms = exposed.iter().zip(&names).map(|((_, ident), name)| {
        quote! {
            #name => ::core::option::Option::Some(
                ::postboard_core::validation::FieldValue::from(&self.#ident),
            ),
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::postboard_core::validation::Fields for #name #ty_generics #where_clause {
            fn field_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field_value(
                &self,
                name: &str,
            ) -> ::core::option::Option<::postboard_core::validation::FieldValue<'_>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Returns the exposed name of a field, or `None` when it is skipped.
fn parse_field_attrs(attrs: &[Attribute], ident: &Ident) -> Result<Option<String>, syn::Error> {
    let mut name_override: Option<String> = None;
    let mut skip = false;
    for attr in attrs {
        if !attr.path().is_ident("field") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if name_override.is_some() {
                    return Err(meta.error("duplicate field(name = ...)"));
                }
                if value.value().is_empty() {
                    return Err(meta.error("field name must not be empty"));
                }
                name_override = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("skip") {
                skip = true;
                return Ok(());
            }
            Err(meta.error("unsupported field attribute"))
        })?;
    }
    if skip {
        return Ok(None);
    }
    Ok(Some(
        name_override.unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_string()),
    ))
}
