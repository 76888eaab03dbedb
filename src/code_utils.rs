use egui_code_editor::Syntax;

/// Resaltado para el playground (el backend de `/run` ejecuta Python).
pub fn python_syntax() -> Syntax {
    Syntax::new("python")
        .with_comment("#")
        .with_comment_multiline([r#"""""#, r#"""""#])
        .with_keywords([
            "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
            "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
            "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
        ])
        .with_types([
            "bool", "bytes", "dict", "float", "int", "list", "object", "set", "str", "tuple",
        ])
        .with_special(["False", "None", "True", "print", "len", "range", "self"])
}

/// Sin resaltado.
pub fn plain_syntax() -> Syntax {
    Syntax::new("text")
}
