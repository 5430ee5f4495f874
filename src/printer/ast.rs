//! Statement tree report

use crate::parser::ast::Statement;

/// Tree lines for one statement, without a trailing newline on each line.
pub fn statement_tree(statement: &Statement) -> Vec<String> {
    let mut lines = vec![statement.kind_name().to_string()];
    match statement {
        Statement::Let { name, value, .. } => {
            lines.push(format!("  ├─ Variable: {}", name));
            lines.push(format!("  └─ Value: {}", value));
        }
        Statement::Def {
            name, params, body, ..
        } => {
            lines.push(format!("  ├─ Function: {}", name));
            lines.push(format!("  ├─ Parameters: [{}]", params.join(", ")));
            lines.push(format!("  └─ Body: {}", body));
        }
        Statement::Main { function, args, .. } => {
            lines.push(format!("  ├─ Function: {}", function));
            lines.push(format!("  └─ Arguments: [{}]", args.join(", ")));
        }
        Statement::Comment { text, .. } => {
            lines.push(format!("  └─ Text: {}", text));
        }
        Statement::Print { payload, .. } => {
            let payload = payload
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("  └─ Payload: {}", payload));
        }
    }
    lines
}

/// The full `--print-ast` report.
pub fn render_program_tree(statements: &[Statement]) -> String {
    let mut out = String::from("=== Abstract Syntax Tree ===\n");
    out.push_str(&format!("Program ({} statements)\n", statements.len()));

    for (index, statement) in statements.iter().enumerate() {
        out.push_str(&format!(
            "\n[{}] line {}: ",
            index + 1,
            statement.location().line
        ));
        for line in statement_tree(statement) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_program_tree() {
        let statements = parse(&[
            "// doubles A",
            "let A 0x10",
            "",
            "def double _a => * 0x02 _a",
            "main double A",
        ])
        .unwrap();

        assert_eq!(
            render_program_tree(&statements),
            indoc! {"
                === Abstract Syntax Tree ===
                Program (4 statements)

                [1] line 1: CommentStatement
                  └─ Text: doubles A

                [2] line 2: LetStatement
                  ├─ Variable: A
                  └─ Value: 0x10

                [3] line 4: DefStatement
                  ├─ Function: double
                  ├─ Parameters: [_a]
                  └─ Body: * 0x02 _a

                [4] line 5: MainStatement
                  ├─ Function: double
                  └─ Arguments: [A]
            "}
        );
    }

    #[test]
    fn test_print_tree() {
        let statements = parse(&["print hello 0x41"]).unwrap();

        assert_eq!(
            statement_tree(&statements[0]),
            vec!["PrintStatement", "  └─ Payload: hello 0x41"]
        );
    }
}
