/// One specification section with the given title and body.
pub fn section(title: &str, body: &str) -> String {
    format!("<div class=\"section-execution\" title=\"{title}\"><p>{body}</p></div>\n")
}

/// A cut-down instruction chapter: a page header, then sections for a few
/// plain instructions and families.
pub fn chapter() -> String {
    let mut html = String::from("<html><head><title>Chapter 6</title></head><body>\n");
    for (title, body) in [
        ("aaload", "Load reference from array"),
        ("if_acmp<cond>", "Branch if reference comparison succeeds"),
        ("if_icmp<cond>", "Branch if int comparison succeeds"),
        ("if<cond>", "Branch if int comparison with zero succeeds"),
        ("ifnull", "Branch if reference is null"),
        ("lconst_<l>", "Push long constant"),
        ("iconst_<i>", "Push int constant"),
    ] {
        html.push_str(&section(title, body));
    }
    html.push_str("</body></html>\n");
    html
}
