//! Parsing of the `#[sort(...)]` field attribute.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// How a field compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Locale collation through `SortText`: `#[sort(String)]`
    String,
    /// Numeric comparison through `SortNumber`: `#[sort(Number)]`
    Number,
    /// The field type's own `Ord`: `#[sort(Ord)]`
    Ord,
}

const EXPECTED_KINDS: &str = "String, Number, Ord";

impl SortKind {
    fn from_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "text" => Ok(SortKind::String),
            "Number" | "number" | "numeric" => Ok(SortKind::Number),
            "Ord" | "ord" | "custom" => Ok(SortKind::Ord),
            other => Err(Error::new(
                span,
                format!("unknown sort kind: '{}'. Expected one of: {}", other, EXPECTED_KINDS),
            )),
        }
    }

    /// Parse a sort kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_name(&ident.to_string(), ident.span())
    }
}

/// Field-level attributes from `#[sort(...)]`.
#[derive(Debug, Clone)]
pub struct SortAttr {
    pub kind: Option<SortKind>,
    pub skip: bool,
    /// Registry name (default: the field name).
    pub rename: Option<String>,
    pub span: Span,
}

impl Default for SortAttr {
    fn default() -> Self {
        SortAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_value(expr: &Expr, what: &str) -> Result<(String, Span)> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok((s.value(), s.span())),
        _ => Err(Error::new(expr.span(), format!("{} must be a string literal", what))),
    }
}

impl Parse for SortAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SortAttr::default();
        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(SortKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            format!("expected sort kind: {}, or skip", EXPECTED_KINDS),
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        let (name, _) = string_value(&nv.value, "rename")?;
                        if name.is_empty() {
                            return Err(Error::new(nv.value.span(), "rename must not be empty"));
                        }
                        attr.rename = Some(name);
                    } else if nv.path.is_ident("ty") {
                        let (name, span) = string_value(&nv.value, "ty")?;
                        attr.kind = Some(SortKind::from_name(&name, span)?);
                        attr.span = span;
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown sort attribute. Expected: String, Number, Ord, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && (attr.kind.is_some() || attr.rename.is_some()) {
            return Err(Error::new(
                attr.span,
                "skip cannot be combined with a sort kind or rename",
            ));
        }

        Ok(attr)
    }
}

/// Extract the `#[sort(...)]` attribute from a field's attributes.
pub fn parse_sort_attrs(attrs: &[Attribute]) -> Result<SortAttr> {
    for attr in attrs {
        if attr.path().is_ident("sort") {
            return attr.parse_args::<SortAttr>();
        }
    }
    Ok(SortAttr::default())
}
