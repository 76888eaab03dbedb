//! Transformaciones de texto para el chat y el contenido de las lecciones.

const FENCE: &str = "```";

/// Trozo de un mensaje del asistente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBlock {
    Text(String),
    Code(String),
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Tras la valla de apertura: etiqueta de lenguaje opcional, salto de línea
/// obligatorio y cuerpo hasta la valla de cierre.
/// Devuelve (código, bytes consumidos).
fn parse_fenced(after: &str) -> Option<(&str, usize)> {
    let tag_len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let body = after[tag_len..].strip_prefix('\n')?;
    let end = body.find(FENCE)?;
    Some((&body[..end], tag_len + 1 + end + FENCE.len()))
}

/// Separa los bloques de código ``` del resto del texto.
pub fn assistant_blocks(text: &str) -> Vec<MessageBlock> {
    let mut blocks = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(start) = rest.find(FENCE) {
        let after = &rest[start + FENCE.len()..];
        match parse_fenced(after) {
            Some((code, consumed)) => {
                plain.push_str(&rest[..start]);
                if !plain.is_empty() {
                    blocks.push(MessageBlock::Text(std::mem::take(&mut plain)));
                }
                blocks.push(MessageBlock::Code(code.to_string()));
                rest = &after[consumed..];
            }
            None => {
                // No abre un bloque válido: se queda como texto
                plain.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        blocks.push(MessageBlock::Text(plain));
    }
    blocks
}

/// HTML del mensaje del asistente, siempre de izquierda a derecha.
pub fn assistant_html(text: &str) -> String {
    let inner: String = assistant_blocks(text)
        .into_iter()
        .map(|block| match block {
            MessageBlock::Text(t) => t.replace('\n', "<br>"),
            MessageBlock::Code(code) => {
                format!("<pre dir=\"ltr\"><code>{}</code></pre>", escape_html(&code))
            }
        })
        .collect();
    format!("<div dir=\"ltr\">{inner}</div>")
}

/// Los mensajes del usuario nunca se interpretan como marcado.
pub fn user_html(text: &str) -> String {
    escape_html(text)
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" | "#160" => Some(' '),
        _ => {
            let num = entity.strip_prefix('#')?;
            let value = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn breaks_line(tag: &str) -> bool {
    matches!(
        tag,
        "br" | "p" | "div" | "li" | "ul" | "ol" | "pre" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
            | "tr" | "table" | "section"
    )
}

fn opens_tag(rest: &str) -> bool {
    rest[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Texto legible a partir del HTML de teoría y ejemplos (egui no pinta HTML).
pub fn html_to_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            // Como en HTML: `<` solo abre etiqueta si le sigue letra, `/` o `!`
            '<' if !opens_tag(rest) => {
                out.push('<');
                rest = &rest[1..];
            }
            '<' => {
                let Some(close) = rest.find('>') else {
                    out.push_str(rest);
                    break;
                };
                let raw = &rest[1..close];
                let name: String = raw
                    .trim_start_matches('/')
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase();
                rest = &rest[close + 1..];

                if !raw.starts_with('/') && (name == "script" || name == "style") {
                    let end_tag = format!("</{name}");
                    let lower = rest.to_ascii_lowercase();
                    rest = match lower.find(&end_tag) {
                        Some(pos) => rest[pos..].find('>').map_or("", |gt| &rest[pos + gt + 1..]),
                        None => "",
                    };
                    continue;
                }
                if breaks_line(&name) && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            '&' => {
                let decoded = rest
                    .find(';')
                    .filter(|&end| end <= 10)
                    .and_then(|end| decode_entity(&rest[1..end]).map(|ch| (ch, end)));
                match decoded {
                    Some((ch, end)) => {
                        out.push(ch);
                        rest = &rest[end + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    let mut lines: Vec<&str> = Vec::new();
    for line in out.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(if line.trim().is_empty() { "" } else { line });
    }
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_code_is_escaped_and_rest_gets_line_breaks() {
        let html = assistant_html("Mira:\n```python\nif a < b:\n    print('x')\n```\nFin");
        assert_eq!(
            html,
            "<div dir=\"ltr\">Mira:<br><pre dir=\"ltr\"><code>if a &lt; b:\n    print(&#39;x&#39;)\n</code></pre><br>Fin</div>"
        );
    }

    #[test]
    fn language_tag_is_optional() {
        let blocks = assistant_blocks("```\nx = 1\n```");
        assert_eq!(blocks, vec![MessageBlock::Code("x = 1\n".into())]);
    }

    #[test]
    fn unterminated_fence_stays_text() {
        let blocks = assistant_blocks("abre ```py\nsin cierre");
        assert_eq!(
            blocks,
            vec![MessageBlock::Text("abre ```py\nsin cierre".into())]
        );
    }

    #[test]
    fn fence_without_newline_is_not_code() {
        let blocks = assistant_blocks("```inline``` y\n```\nok\n```");
        assert_eq!(
            blocks,
            vec![
                MessageBlock::Text("```inline``` y\n".into()),
                MessageBlock::Code("ok\n".into()),
            ]
        );
    }

    #[test]
    fn user_text_is_never_markup() {
        assert_eq!(
            user_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn theory_html_becomes_readable_text() {
        let text = html_to_text(
            "<h2>Listas</h2><p>Una lista &lt;list&gt; guarda&nbsp;valores.</p><script>x()</script><ul><li>uno</li><li>dos</li></ul>",
        );
        assert_eq!(text, "Listas\nUna lista <list> guarda valores.\nuno\ndos");
    }

    #[test]
    fn comparisons_in_code_are_not_tags() {
        let code = "for i in range(5):\n    if i < 3 and i > 0:\n        print(i)";
        assert_eq!(html_to_text(code), code);
        assert_eq!(html_to_text("print(a > b)\nprint(1<2)"), "print(a > b)\nprint(1<2)");
    }

    #[test]
    fn bare_less_than_in_theory_keeps_the_paragraph() {
        assert_eq!(
            html_to_text("<p>Usa x < 10 en el bucle</p><p>Fin</p>"),
            "Usa x < 10 en el bucle\nFin"
        );
    }

    #[test]
    fn plain_code_examples_survive() {
        assert_eq!(html_to_text("x = 5\nprint(type(x))"), "x = 5\nprint(type(x))");
    }
}
