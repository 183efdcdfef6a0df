use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Expr, GenericArgument, Ident, PathArguments, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// One `name: Type = default` entry of a `config!` block.
///
/// A field marked with `#[nested]` holds another generated config struct. Its
/// partial twin is then `Option<Partial{Type}>` instead of `Option<Type>`.
struct ConfigField {
    attrs: Vec<Attribute>,
    nested: bool,
    name: Ident,
    ty: Type,
    default_value: Expr,
}

impl Parse for ConfigField {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = input.call(Attribute::parse_outer)?;
        let before = attrs.len();
        attrs.retain(|attr| !attr.path().is_ident("nested"));
        let nested = attrs.len() != before;

        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        input.parse::<Token![=]>()?;
        let default_value: Expr = input.parse()?;

        Ok(ConfigField {
            attrs,
            nested,
            name,
            ty,
            default_value,
        })
    }
}

struct ConfigInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    fields: Punctuated<ConfigField, Token![,]>,
}

impl Parse for ConfigInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;
        let content;
        syn::braced!(content in input);
        let fields = content.parse_terminated(ConfigField::parse, Token![,])?;
        Ok(ConfigInput {
            attrs,
            vis,
            name,
            fields,
        })
    }
}

/// Returns true for `Option<T>`, so that optional fields are not wrapped twice
/// in the partial struct.
fn is_option(ty: &Type) -> bool {
    if let Type::Path(tp) = ty
        && let Some(seg) = tp.path.segments.last()
        && seg.ident == "Option"
        && let PathArguments::AngleBracketed(args) = &seg.arguments
    {
        return args.args.len() == 1 && matches!(args.args[0], GenericArgument::Type(_));
    }
    false
}

/// The name of the partial struct generated for a nested config type.
fn partial_ident(ty: &Type) -> syn::Result<Ident> {
    if let Type::Path(tp) = ty
        && let Some(seg) = tp.path.segments.last()
    {
        return Ok(format_ident!("Partial{}", seg.ident));
    }
    Err(syn::Error::new_spanned(
        ty,
        "nested config fields must name a config struct",
    ))
}

fn partial_field(field: &ConfigField) -> syn::Result<TokenStream2> {
    let name = &field.name;
    let ty = &field.ty;

    let partial_ty = if field.nested {
        let partial = partial_ident(ty)?;
        quote! { Option<#partial> }
    } else if is_option(ty) {
        quote! { #ty }
    } else {
        quote! { Option<#ty> }
    };

    Ok(quote! { #name: #partial_ty })
}

fn from_partial_assignment(field: &ConfigField) -> TokenStream2 {
    let name = &field.name;
    let ty = &field.ty;
    let default_value = &field.default_value;

    if field.nested {
        quote! {
            #name: partial.#name.map(<#ty>::from_partial).unwrap_or_else(|| #default_value)
        }
    } else if is_option(ty) {
        quote! { #name: partial.#name.or(#default_value) }
    } else {
        quote! { #name: partial.#name.unwrap_or_else(|| #default_value) }
    }
}

fn accessors(field: &ConfigField) -> TokenStream2 {
    let name = &field.name;
    let ty = &field.ty;
    let with_name = format_ident!("with_{}", name);
    let set_name = format_ident!("set_{}", name);
    let get_name = format_ident!("get_{}", name);

    quote! {
        pub fn #with_name(mut self, #name: #ty) -> Self {
            self.#name = #name;
            self
        }
        pub fn #set_name(&mut self, #name: #ty) {
            self.#name = #name;
        }
        pub fn #get_name(&self) -> &#ty {
            &self.#name
        }
    }
}

fn expand(input: ConfigInput) -> syn::Result<TokenStream2> {
    let attrs = &input.attrs;
    let vis = &input.vis;
    let struct_name = &input.name;
    let partial_struct_name = format_ident!("Partial{}", struct_name);

    let fields = input.fields.iter().map(|f| {
        let field_attrs = &f.attrs;
        let name = &f.name;
        let ty = &f.ty;
        quote! { #( #field_attrs )* #name: #ty }
    });
    let partial_fields = input
        .fields
        .iter()
        .map(partial_field)
        .collect::<syn::Result<Vec<_>>>()?;
    let from_partial_assignments = input.fields.iter().map(from_partial_assignment);
    let methods = input.fields.iter().map(accessors);
    let default_assignments = input.fields.iter().map(|f| {
        let name = &f.name;
        let default_value = &f.default_value;
        quote! { #name: #default_value }
    });

    Ok(quote! {
        #( #attrs )*
        #[derive(Debug, Clone, serde::Serialize)]
        #vis struct #struct_name {
            #( #fields, )*
        }

        /// Every field optional, as read from a TOML file. Missing fields fall
        /// back to the defaults of the full config.
        #[derive(Debug, Clone, Default, serde::Deserialize)]
        #vis struct #partial_struct_name {
            #( #partial_fields, )*
        }

        impl #struct_name {
            pub fn from_partial(partial: #partial_struct_name) -> Self {
                Self {
                    #( #from_partial_assignments, )*
                }
            }
            pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
                Ok(Self::from_partial(toml::from_str(content)?))
            }
            pub fn from_file<P: AsRef<std::path::Path>>(file_path: P) -> anyhow::Result<Self> {
                let canonic_path = std::fs::canonicalize(file_path)?;
                let content = std::fs::read_to_string(canonic_path)?;
                Self::from_toml_str(&content)
            }
            pub fn from_optional_file<P: AsRef<std::path::Path>>(file_path: Option<P>) -> anyhow::Result<Self> {
                match file_path {
                    Some(p) => Self::from_file(p),
                    None => Ok(Self::default()),
                }
            }
            #( #methods )*
        }

        impl Default for #struct_name {
            fn default() -> Self {
                #struct_name {
                    #( #default_assignments, )*
                }
            }
        }
    })
}

/// Generates a config struct together with its partial TOML representation.
///
/// ```ignore
/// config! {
///     pub struct DeterminizeConfig {
///         dead_state: bool = true,
///         #[nested]
///         logger: LoggerConfig = LoggerConfig::default(),
///     }
/// }
/// ```
#[proc_macro]
pub fn config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ConfigInput);
    match expand(input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}
