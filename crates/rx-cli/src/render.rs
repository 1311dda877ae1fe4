//! Text and JSON rendering of generated s-expressions

use rx_sexp::Sexp;

/// Lists nested deeper than this are broken over lines in pretty mode
const FLAT_DEPTH: usize = 2;

/// Parenthesized s-expression printer
#[derive(Debug, Clone, Copy)]
pub(crate) struct SexpPrinter {
    pretty: bool,
}

impl SexpPrinter {
    pub(crate) fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub(crate) fn print(&self, sexp: &Sexp) -> serde_json::Result<String> {
        self.print_value(sexp, 0)
    }

    fn print_value(&self, sexp: &Sexp, indent: usize) -> serde_json::Result<String> {
        match sexp {
            Sexp::List(items) => self.print_list(items, indent),
            atom => print_atom(atom),
        }
    }

    fn print_list(&self, items: &[Sexp], indent: usize) -> serde_json::Result<String> {
        if !self.pretty || items.iter().map(depth).max().unwrap_or(0) < FLAT_DEPTH {
            let parts = items
                .iter()
                .map(|item| self.print_value(item, indent))
                .collect::<serde_json::Result<Vec<_>>>()?;
            return Ok(format!("({})", parts.join(" ")));
        }

        let leading = items.iter().take_while(|item| item.is_atom()).count();
        let (head, rest) = items.split_at(leading);
        let child_indent = if head.is_empty() { indent + 1 } else { indent + 2 };

        let mut lines = Vec::with_capacity(rest.len() + 1);
        if !head.is_empty() {
            let atoms = head
                .iter()
                .map(print_atom)
                .collect::<serde_json::Result<Vec<_>>>()?;
            lines.push(atoms.join(" "));
        }
        for item in rest {
            lines.push(self.print_value(item, child_indent)?);
        }

        let separator = format!("\n{}", " ".repeat(child_indent));
        Ok(format!("({})", lines.join(&separator)))
    }
}

/// Nesting depth: atoms are 0, a list is one more than its deepest element
fn depth(sexp: &Sexp) -> usize {
    match sexp {
        Sexp::List(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn print_atom(sexp: &Sexp) -> serde_json::Result<String> {
    Ok(match sexp {
        Sexp::Symbol(name) => print_symbol(name),
        Sexp::String(s) => serde_json::to_string(s)?,
        Sexp::Integer(n) => n.to_string(),
        Sexp::Unsigned(n) => n.to_string(),
        Sexp::Float(n) => format!("{n:?}"),
        Sexp::Boolean(b) => b.to_string(),
        Sexp::Null => "nil".to_string(),
        Sexp::Kind(kind) => kind.to_string(),
        Sexp::Opaque(node) => format!("#{}", serde_json::to_string(node)?),
        Sexp::List(_) => SexpPrinter::new(false).print(sexp)?,
    })
}

/// Bare name, or `|name|` with `|` and `\` escaped when the bare form would
/// read back as something else (another atom, or more than one token)
fn print_symbol(name: &str) -> String {
    if !needs_quoting(name) {
        return name.to_string();
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('|');
    for c in name.chars() {
        if matches!(c, '|' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('|');
    quoted
}

fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || name.starts_with('#')
        || matches!(name, "nil" | "true" | "false")
        || name.parse::<f64>().is_ok()
        || name.chars().any(|c| {
            c.is_whitespace() || matches!(c, '(' | ')' | '"' | '|' | '\\' | ';' | '\'')
        })
}

/// Render as nested JSON arrays
pub(crate) fn to_json(sexp: &Sexp, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(sexp)
    } else {
        serde_json::to_string(sexp)
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
