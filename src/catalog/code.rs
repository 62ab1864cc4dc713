//! Flutter source fragments for each content template.
//!
//! Every fragment is written with two-space nesting and then prefixed line by
//! line with the caller's indent. `index` is spliced in verbatim: a literal
//! number for fixed lists, `${index + 1}` for the builder.

/// Prefix every line of `body` with `indent`.
pub(crate) fn indent_lines(body: &str, indent: &str) -> String {
    body.lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn plain_box(index: &str, indent: &str) -> String {
    let body = format!(
        "Container(
  decoration: BoxDecoration(
    color: Colors.blue,
    borderRadius: BorderRadius.circular(8),
  ),
  child: Center(
    child: Text(
      '{index}',
      style: TextStyle(
        color: Colors.white,
        fontWeight: FontWeight.bold,
      ),
    ),
  ),
)"
    );
    indent_lines(&body, indent)
}

pub(crate) fn media_tile(index: &str, indent: &str) -> String {
    let body = format!(
        "GridTile(
  header: GridTileBar(
    backgroundColor: Colors.black45,
    title: Text('Item {index}'),
  ),
  child: Image.network(
    'https://via.placeholder.com/300',
    fit: BoxFit.cover,
  ),
)"
    );
    indent_lines(&body, indent)
}

pub(crate) fn icon_card(index: &str, indent: &str) -> String {
    let body = format!(
        "Card(
  elevation: 4,
  child: Column(
    mainAxisAlignment: MainAxisAlignment.center,
    children: [
      Icon(Icons.star, size: 48, color: Colors.amber),
      SizedBox(height: 8),
      Text(
        'Item {index}',
        style: TextStyle(fontWeight: FontWeight.bold),
      ),
    ],
  ),
)"
    );
    indent_lines(&body, indent)
}

pub(crate) fn overlay_stack(index: &str, indent: &str) -> String {
    let body = format!(
        "Stack(
  fit: StackFit.expand,
  children: [
    Image.network(
      'https://via.placeholder.com/300',
      fit: BoxFit.cover,
    ),
    Positioned(
      bottom: 0,
      left: 0,
      right: 0,
      child: Container(
        color: Colors.black54,
        padding: EdgeInsets.all(8),
        child: Text(
          'Item {index}',
          style: TextStyle(
            color: Colors.white,
            fontWeight: FontWeight.bold,
          ),
        ),
      ),
    ),
  ],
)"
    );
    indent_lines(&body, indent)
}

/// The price line is `'\$<index>0.00'`: a Dart-escaped dollar sign followed
/// by the index times ten.
pub(crate) fn product_card(index: &str, indent: &str) -> String {
    let body = format!(
        "Card(
  clipBehavior: Clip.antiAlias,
  child: Column(
    crossAxisAlignment: CrossAxisAlignment.stretch,
    children: [
      Expanded(
        child: Image.network(
          'https://via.placeholder.com/300',
          fit: BoxFit.cover,
        ),
      ),
      Padding(
        padding: EdgeInsets.all(8),
        child: Column(
          crossAxisAlignment: CrossAxisAlignment.start,
          children: [
            Text(
              'Product {index}',
              style: TextStyle(fontWeight: FontWeight.bold),
            ),
            SizedBox(height: 4),
            Text(
              '\\${index}0.00',
              style: TextStyle(
                color: Colors.green,
                fontWeight: FontWeight.bold,
              ),
            ),
          ],
        ),
      ),
    ],
  ),
)"
    );
    indent_lines(&body, indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_lines_prefixes_every_line() {
        assert_eq!(indent_lines("a(\n  b,\n)", "  "), "  a(\n    b,\n  )");
        assert_eq!(indent_lines("x", ""), "x");
    }

    #[test]
    fn test_plain_box_fragment() {
        let code = plain_box("7", "");
        assert!(code.starts_with("Container(\n  decoration: BoxDecoration("));
        assert!(code.contains("      '7',\n"));
        assert!(code.ends_with("\n)"));
    }

    #[test]
    fn test_product_price_escapes_dollar() {
        let code = product_card("3", "");
        assert!(code.contains("'Product 3'"));
        assert!(code.contains(r"'\$30.00'"));
    }

    #[test]
    fn test_fragments_indent_closing_paren() {
        for fragment in [plain_box, media_tile, icon_card, overlay_stack, product_card] {
            let code = fragment("1", "    ");
            assert!(code.lines().all(|line| line.starts_with("    ")));
            assert_eq!(code.lines().last(), Some("    )"));
        }
    }
}
