//! AST printer (`spec.md` §4.5).
//!
//! Renders a `Node` as an indented textual tree: each node begins with
//! its kind label, followed by `field: value` lines indented two spaces
//! per depth level. This is for human inspection and the test suite —
//! never treat the output as a serialization format.

use crate::ast::Node;
use std::fmt::Write;

pub fn print_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_field(out: &mut String, depth: usize, label: &str, value: &str) {
    indent(out, depth);
    let _ = writeln!(out, "{label}: {value}");
}

fn write_child(out: &mut String, depth: usize, label: &str, child: &Node) {
    indent(out, depth);
    let _ = writeln!(out, "{label}:");
    write_node(out, child, depth + 1);
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Integer(v) => {
            indent(out, depth);
            let _ = writeln!(out, "integer:");
            write_field(out, depth + 1, "value", &v.to_string());
        }
        Node::Float(v) => {
            indent(out, depth);
            let _ = writeln!(out, "float:");
            write_field(out, depth + 1, "value", &v.to_string());
        }
        Node::String(s) => {
            indent(out, depth);
            let _ = writeln!(out, "string:");
            write_field(out, depth + 1, "value", s);
        }
        Node::Var(name) => {
            indent(out, depth);
            let _ = writeln!(out, "var:");
            write_field(out, depth + 1, "name", name);
        }
        Node::Primitive(name) => {
            indent(out, depth);
            let _ = writeln!(out, "primitive:");
            write_field(out, depth + 1, "name", name);
        }
        Node::FuncBase(name) => {
            indent(out, depth);
            let _ = writeln!(out, "funcbase:");
            write_field(out, depth + 1, "name", name);
        }
        Node::Array { elements, empty } => {
            indent(out, depth);
            let _ = writeln!(out, "array:");
            write_field(out, depth + 1, "empty", &empty.to_string());
            indent(out, depth + 1);
            let _ = writeln!(out, "elements:");
            for el in elements {
                write_node(out, el, depth + 2);
            }
        }
        Node::Decl { ty, name, init } => {
            indent(out, depth);
            let _ = writeln!(out, "declaration:");
            write_child(out, depth + 1, "type", ty);
            write_field(out, depth + 1, "name", name);
            write_child(out, depth + 1, "init", init);
        }
        Node::DeclNoInit { ty, name } => {
            indent(out, depth);
            let _ = writeln!(out, "declaration:");
            write_child(out, depth + 1, "type", ty);
            write_field(out, depth + 1, "name", name);
        }
        Node::Assign { name, op, expr } => {
            indent(out, depth);
            let _ = writeln!(out, "assign:");
            write_field(out, depth + 1, "name", name);
            write_field(out, depth + 1, "op", op);
            write_child(out, depth + 1, "expr", expr);
        }
        Node::BinOp { op, left, right } => {
            indent(out, depth);
            let _ = writeln!(out, "binop:");
            write_field(out, depth + 1, "op", op.symbol());
            write_child(out, depth + 1, "left", left);
            write_child(out, depth + 1, "right", right);
        }
        Node::UnaryOp { op, operand } => {
            indent(out, depth);
            let _ = writeln!(out, "unaryop:");
            write_field(out, depth + 1, "op", op.symbol());
            write_child(out, depth + 1, "operand", operand);
        }
        Node::Import { module } => {
            indent(out, depth);
            let _ = writeln!(out, "import:");
            write_field(out, depth + 1, "module", module);
        }
        Node::ImportFrom { module, member } => {
            indent(out, depth);
            let _ = writeln!(out, "importfrom:");
            write_field(out, depth + 1, "module", module);
            write_field(out, depth + 1, "member", member);
        }
        // `parent`/`child`, not the original revision's `subs_node`/
        // `subs_expr` copy-paste (Design Note §9, Open Question).
        Node::Child { parent, child } => {
            indent(out, depth);
            let _ = writeln!(out, "child:");
            write_child(out, depth + 1, "parent", parent);
            write_child(out, depth + 1, "child", child);
        }
        Node::Subscript { base, index } => {
            indent(out, depth);
            let _ = writeln!(out, "subscript:");
            write_child(out, depth + 1, "base", base);
            write_child(out, depth + 1, "index", index);
        }
        Node::Call { callee, args } => {
            indent(out, depth);
            let _ = writeln!(out, "call:");
            write_child(out, depth + 1, "callee", callee);
            indent(out, depth + 1);
            let _ = writeln!(out, "args:");
            if let Some(args) = args {
                for arg in args {
                    write_node(out, arg, depth + 2);
                }
            } else {
                indent(out, depth + 2);
                let _ = writeln!(out, "none");
            }
        }
        Node::Enum { name, body } => {
            indent(out, depth);
            let _ = writeln!(out, "enum:");
            write_field(out, depth + 1, "name", name);
            write_child(out, depth + 1, "body", body);
        }
        Node::Body {
            stmts,
            tokens_consumed,
        } => {
            indent(out, depth);
            let _ = writeln!(out, "body:");
            write_field(out, depth + 1, "tokens_consumed", &tokens_consumed.to_string());
            indent(out, depth + 1);
            let _ = writeln!(out, "stmts:");
            for stmt in stmts {
                write_node(out, stmt, depth + 2);
            }
        }
        Node::GenType {
            args,
            tokens_consumed,
        } => {
            indent(out, depth);
            let _ = writeln!(out, "gentype:");
            write_field(out, depth + 1, "tokens_consumed", &tokens_consumed.to_string());
            indent(out, depth + 1);
            let _ = writeln!(out, "args:");
            for arg in args {
                write_node(out, arg, depth + 2);
            }
        }
        Node::If { cond, body } => {
            indent(out, depth);
            let _ = writeln!(out, "if:");
            write_child(out, depth + 1, "cond", cond);
            write_child(out, depth + 1, "body", body);
        }
        Node::Elif { cond, body } => {
            indent(out, depth);
            let _ = writeln!(out, "elif:");
            write_child(out, depth + 1, "cond", cond);
            write_child(out, depth + 1, "body", body);
        }
        Node::Else { body } => {
            indent(out, depth);
            let _ = writeln!(out, "else:");
            write_child(out, depth + 1, "body", body);
        }
        Node::Repeat { count, body } => {
            indent(out, depth);
            let _ = writeln!(out, "repeat:");
            write_child(out, depth + 1, "count", count);
            write_child(out, depth + 1, "body", body);
        }
        Node::While { cond, body } => {
            indent(out, depth);
            let _ = writeln!(out, "while:");
            write_child(out, depth + 1, "cond", cond);
            write_child(out, depth + 1, "body", body);
        }
        Node::For { var, iter, body } => {
            indent(out, depth);
            let _ = writeln!(out, "for:");
            write_child(out, depth + 1, "var", var);
            write_child(out, depth + 1, "iter", iter);
            write_child(out, depth + 1, "body", body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_node_prints_parent_and_child_labels() {
        let node = Node::Child {
            parent: Box::new(Node::Var("a".into())),
            child: Box::new(Node::Var("b".into())),
        };
        let printed = print_node(&node);
        assert!(printed.contains("parent:"));
        assert!(printed.contains("child:"));
        assert!(!printed.contains("subs_node"));
        assert!(!printed.contains("subs_expr"));
    }

    #[test]
    fn binop_prints_source_symbol() {
        let node = Node::BinOp {
            op: crate::ast::OpKind::Add,
            left: Box::new(Node::Integer(1)),
            right: Box::new(Node::Integer(2)),
        };
        let printed = print_node(&node);
        assert!(printed.contains("op: +"));
    }
}
