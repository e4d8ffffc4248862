//! PHP rendering of class nodes.

use forma_ir::{ClassNode, Expr, Member, MethodNode, Param, PropertyNode, Statement, TypeHint};

use crate::CodeBuilder;

/// Render the body of a PHP file (everything after the `<?php` opener).
///
/// `namespace` applies to every class in the file; classes are declared by
/// their short name.
pub fn render_file(namespace: Option<&str>, classes: &[ClassNode]) -> String {
    let mut builder = CodeBuilder::new();
    if let Some(namespace) = namespace {
        builder = builder.line(&format!("namespace {namespace};")).blank();
    }

    classes
        .iter()
        .enumerate()
        .fold(builder, |b, (i, class)| {
            class_block(b.when(i > 0, CodeBuilder::blank), class)
        })
        .build()
}

/// Render a single class declaration.
pub fn render_class(class: &ClassNode) -> String {
    class_block(CodeBuilder::new(), class).build()
}

/// The parameter type declaration for `ty`, or `None` when undeclared.
///
/// Qualified names are made absolute: `Entities\Address` → `\Entities\Address`.
pub fn type_declaration(ty: &TypeHint) -> Option<String> {
    ty.resolved_name()
}

/// Render one body statement.
pub fn render_statement(stmt: &Statement) -> String {
    match stmt {
        Statement::Return(expr) => format!("return {};", render_expr(expr)),
        Statement::Assign { target, value } => {
            format!("{} = {};", render_expr(target), render_expr(value))
        }
    }
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::This => "$this".to_string(),
        Expr::Variable(name) => format!("${name}"),
        Expr::PropertyFetch(name) => format!("$this->{name}"),
    }
}

fn render_param(param: &Param) -> String {
    match type_declaration(&param.ty) {
        Some(ty) => format!("{ty} ${}", param.name),
        None => format!("${}", param.name),
    }
}

fn class_block(builder: CodeBuilder, class: &ClassNode) -> CodeBuilder {
    builder.block(&format!("class {}", class.short_name()), |b| {
        class.members.iter().enumerate().fold(b, |b, (i, member)| {
            let b = b.when(i > 0, CodeBuilder::blank);
            match member {
                Member::Property(property) => property_decl(b, property),
                Member::Method(method) => method_decl(b, method),
            }
        })
    })
}

fn property_decl(builder: CodeBuilder, property: &PropertyNode) -> CodeBuilder {
    builder
        .when_some(property.doc.as_ref(), CodeBuilder::doc_block)
        .line(&format!("{} ${};", property.visibility.as_str(), property.name))
}

fn method_decl(builder: CodeBuilder, method: &MethodNode) -> CodeBuilder {
    let params: Vec<_> = method.params().iter().map(render_param).collect();
    let header = format!(
        "{} function {}({})",
        method.visibility.as_str(),
        method.name,
        params.join(", ")
    );

    builder
        .when_some(method.doc.as_ref(), CodeBuilder::doc_block)
        .block(&header, |b| {
            b.each(&method.body, |b, stmt| b.line(&render_statement(stmt)))
        })
}
