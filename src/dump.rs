use crate::scanner::token::Token;

/// Render tokens as the fixed-width table printed by `surtr-lex`.
///
/// Terminal tokens are not listed.
pub fn to_table(tokens: &[Token]) -> String {
    let mut buf = String::new();
    buf.push_str(&format!(
        "+{:^4}+{:^32}+{:^16}+{:^8}+{:^8}+\n",
        "NUM", "IDENTIFIER", "TOKEN", "ROW", "COL"
    ));
    for (index, token) in tokens
        .iter()
        .take_while(|t| !t.kind.is_terminal())
        .enumerate()
    {
        buf.push_str(&format!(
            "|{:^4}|{:^32}|{:^16}|{:^8}|{:^8}|\n",
            index,
            token.text(),
            token.kind.name(),
            token.line,
            token.column
        ));
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
