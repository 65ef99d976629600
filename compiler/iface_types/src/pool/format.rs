//! Type formatting for error messages.

#![allow(clippy::format_push_string)]

use crate::{Idx, Pool, Tag};

impl Pool {
    /// Format a type as it would be written in source.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        if let Some(name) = idx.basic_name() {
            buf.push_str(name);
            return;
        }
        match self.tag(idx) {
            Tag::Slice => {
                buf.push_str("[]");
                if let Some(elem) = self.slice_elem(idx) {
                    self.format_type_into(elem, buf);
                }
            }
            Tag::Signature => {
                buf.push_str("func");
                self.format_signature_into(idx, buf);
            }
            Tag::Interface => self.format_interface_into(idx, buf),
            Tag::Union => {
                for (i, term) in self.union_terms(idx).unwrap_or_default().iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" | ");
                    }
                    if term.tilde {
                        buf.push('~');
                    }
                    self.format_type_into(term.ty, buf);
                }
            }
            Tag::Named => {
                if let Some(named) = self.named(idx) {
                    buf.push_str(self.name_str(named.name));
                }
            }
            Tag::TypeParam => {
                if let Some(param) = self.type_param(idx) {
                    buf.push_str(self.name_str(param.name));
                }
            }
            Tag::Invalid
            | Tag::Bool
            | Tag::Int
            | Tag::Int64
            | Tag::Float64
            | Tag::String
            | Tag::Byte
            | Tag::Rune => buf.push_str("invalid type"),
        }
    }

    /// `[P C](params) results`, without the `func` keyword.
    fn format_signature_into(&self, idx: Idx, buf: &mut String) {
        let Some(sig) = self.signature(idx) else {
            return;
        };
        if !sig.type_params.is_empty() {
            buf.push('[');
            for (i, &param) in sig.type_params.iter().enumerate() {
                if i > 0 {
                    buf.push_str(", ");
                }
                self.format_type_into(param, buf);
                if let Some(data) = self.type_param(param) {
                    buf.push(' ');
                    self.format_type_into(data.bound, buf);
                }
            }
            buf.push(']');
        }
        buf.push('(');
        let last = sig.params.len().saturating_sub(1);
        for (i, &param) in sig.params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            if sig.variadic && i == last {
                buf.push_str("...");
                // Variadic parameters are stored as slices.
                let elem = self.slice_elem(param).unwrap_or(param);
                self.format_type_into(elem, buf);
            } else {
                self.format_type_into(param, buf);
            }
        }
        buf.push(')');
        match sig.results.as_slice() {
            [] => {}
            [single] => {
                buf.push(' ');
                self.format_type_into(*single, buf);
            }
            results => {
                buf.push_str(" (");
                for (i, &result) in results.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(result, buf);
                }
                buf.push(')');
            }
        }
    }

    fn format_interface_into(&self, idx: Idx, buf: &mut String) {
        let Some(iface) = self.interface(idx) else {
            return;
        };
        if iface.methods.is_empty() && iface.embeddeds.is_empty() {
            buf.push_str("interface{}");
            return;
        }
        buf.push_str("interface{");
        let mut first = true;
        for embedded in &iface.embeddeds {
            if !first {
                buf.push_str("; ");
            }
            first = false;
            self.format_type_into(embedded.ty, buf);
        }
        for &method in &iface.methods {
            if !first {
                buf.push_str("; ");
            }
            first = false;
            let method = self.method(method);
            buf.push_str(self.name_str(method.name));
            self.format_signature_into(method.sig, buf);
        }
        buf.push('}');
    }
}
