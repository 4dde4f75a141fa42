/// Builds the query string for a search request.
///
/// The first page is addressed by keywords; later pages reuse the cursor the
/// upstream service handed out on the previous call.
pub fn build_query(keywords: &str, cursor: &str) -> String {
    if cursor.is_empty() {
        // Only spaces are substituted, the rest goes out as typed.
        format!("query={}&c=0", keywords.replace(' ', "%20"))
    } else {
        clean_cursor(cursor)
    }
}

/// Strips the `amp;` leftovers of HTML-escaped ampersands from a cursor.
pub fn clean_cursor(cursor: &str) -> String {
    cursor.replace("amp;", "")
}
