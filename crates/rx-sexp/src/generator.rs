//! Recursive visitor and rule interpreters

use crate::error::{SexpError, SexpResult};
use crate::registry::{Registry, Rule};
use crate::sexp::Sexp;
use rx_algebra::{Field, Header, NodeKind, NodeRef, Operand, Tuple};

/// Visit `node` with the canonical registry
pub fn visit<'a>(node: impl Into<NodeRef<'a>>) -> SexpResult<Sexp> {
    Generator::canonical().visit(node)
}

/// Converts algebra trees into s-expressions according to a [`Registry`]
///
/// The generator only reads the tree; the returned [`Sexp`] owns all of its
/// data and does not borrow from the input.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r Registry,
}

impl Generator<'static> {
    /// Generator over the canonical registry
    pub fn canonical() -> Self {
        Self::new(Registry::canonical())
    }
}

impl<'r> Generator<'r> {
    /// Generator over a custom registry
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// The registry driving this generator
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Convert `node` into an s-expression.
    ///
    /// Values without a registered rule (literals, counts, unregistered
    /// kinds) are returned unchanged.
    pub fn visit<'a>(&self, node: impl Into<NodeRef<'a>>) -> SexpResult<Sexp> {
        let node = node.into();
        let Some(kind) = node.kind() else {
            return Ok(identity(node));
        };
        let Some(rule) = self.registry.rule(kind) else {
            log::trace!("No rule for node kind '{kind}', passing through");
            return Ok(identity(node));
        };

        match *rule {
            Rule::Static { tag } => Ok(fixed(tag)),
            Rule::Unary { tag, field } => self.unary(node, kind, tag, field),
            Rule::Binary { tag, left, right } => self.binary(node, kind, tag, left, right),
            Rule::Collect => self.collect(node, kind),
            Rule::Base => base(node, kind),
            Rule::Materialized => materialized(node, kind),
            Rule::Extend => self.extend(node, kind),
            Rule::Attribute => attribute(node, kind),
        }
    }

    fn unary(
        &self,
        node: NodeRef<'_>,
        kind: NodeKind,
        tag: &str,
        field: Field,
    ) -> SexpResult<Sexp> {
        let operand = child(node, kind, field)?;
        Ok(Sexp::List(vec![Sexp::symbol(tag), self.visit(operand)?]))
    }

    fn binary(
        &self,
        node: NodeRef<'_>,
        kind: NodeKind,
        tag: &str,
        left: Field,
        right: Field,
    ) -> SexpResult<Sexp> {
        let left = child(node, kind, left)?;
        let right = child(node, kind, right)?;
        Ok(Sexp::List(vec![
            Sexp::symbol(tag),
            self.visit(left)?,
            self.visit(right)?,
        ]))
    }

    fn collect(&self, node: NodeRef<'_>, kind: NodeKind) -> SexpResult<Sexp> {
        let items = node.items().ok_or(SexpError::MissingField {
            kind,
            field: Field::Items,
        })?;
        items
            .into_iter()
            .map(|item| self.visit(item))
            .collect::<SexpResult<Vec<_>>>()
            .map(Sexp::List)
    }

    fn extend(&self, node: NodeRef<'_>, kind: NodeKind) -> SexpResult<Sexp> {
        let operand = child(node, kind, Field::Operand)?;
        let extensions = node.extensions().ok_or(SexpError::MissingField {
            kind,
            field: Field::Extensions,
        })?;
        Ok(Sexp::List(vec![
            Sexp::symbol("extend"),
            self.visit(operand)?,
            self.extensions(extensions)?,
        ]))
    }

    /// `[[name, visit(expr)], ...]` in declaration order
    fn extensions(&self, extensions: &[(String, Operand)]) -> SexpResult<Sexp> {
        extensions
            .iter()
            .map(|(name, expr)| {
                Ok(Sexp::List(vec![Sexp::symbol(name.as_str()), self.visit(expr)?]))
            })
            .collect::<SexpResult<Vec<_>>>()
            .map(Sexp::List)
    }
}

fn child<'a>(node: NodeRef<'a>, kind: NodeKind, field: Field) -> SexpResult<NodeRef<'a>> {
    node.field(field).ok_or(SexpError::MissingField { kind, field })
}

fn identity(node: NodeRef<'_>) -> Sexp {
    match node {
        NodeRef::Literal(literal) => Sexp::from(literal),
        NodeRef::Count(count) => Sexp::Unsigned(count),
        other => Sexp::Opaque(other.to_node()),
    }
}

fn fixed(tag: &str) -> Sexp {
    Sexp::List(vec![Sexp::symbol(tag)])
}

fn base(node: NodeRef<'_>, kind: NodeKind) -> SexpResult<Sexp> {
    let name = node.name().ok_or(SexpError::MissingField {
        kind,
        field: Field::Name,
    })?;
    let header = node.header().ok_or(SexpError::MissingField {
        kind,
        field: Field::Header,
    })?;
    Ok(Sexp::List(vec![
        Sexp::symbol("base"),
        Sexp::from(name),
        base_header(header),
    ]))
}

fn materialized(node: NodeRef<'_>, kind: NodeKind) -> SexpResult<Sexp> {
    let header = node.header().ok_or(SexpError::MissingField {
        kind,
        field: Field::Header,
    })?;
    let tuples = node.tuples().ok_or(SexpError::MissingField {
        kind,
        field: Field::Tuples,
    })?;
    Ok(Sexp::List(vec![
        Sexp::symbol("materialized"),
        base_header(header),
        rows(tuples),
    ]))
}

fn attribute(node: NodeRef<'_>, kind: NodeKind) -> SexpResult<Sexp> {
    let name = node.name().ok_or(SexpError::MissingField {
        kind,
        field: Field::Name,
    })?;
    Ok(Sexp::List(vec![Sexp::symbol("attr"), Sexp::symbol(name)]))
}

/// `[[name, kind], ...]`, read directly from the attributes
fn base_header(header: &Header) -> Sexp {
    Sexp::List(
        header
            .iter()
            .map(|attribute| {
                Sexp::List(vec![
                    Sexp::symbol(attribute.name.as_str()),
                    Sexp::Kind(attribute.kind),
                ])
            })
            .collect(),
    )
}

/// Rows as lists of raw scalars; tuple values are not visited
fn rows(tuples: &[Tuple]) -> Sexp {
    Sexp::List(
        tuples
            .iter()
            .map(|tuple| Sexp::List(tuple.iter().map(Sexp::from).collect()))
            .collect(),
    )
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
