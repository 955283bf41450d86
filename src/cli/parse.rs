use admit_core::category::Category;

/// `category:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub category: Category,
    pub id: String,
}

/// `category=text`; the query may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedQuery {
    pub category: Category,
    pub query: String,
}

/// Parse category from string
pub fn parse_category(s: &str) -> std::result::Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

/// Parse `category:id`
pub fn parse_item_ref(s: &str) -> std::result::Result<ItemRef, String> {
    let (category, id) = s
        .split_once(':')
        .ok_or_else(|| format!("expected category:id, got '{}'", s))?;
    if id.is_empty() {
        return Err(format!("missing id in '{}'", s));
    }
    Ok(ItemRef {
        category: parse_category(category)?,
        id: id.to_string(),
    })
}

/// Parse `category=text`
pub fn parse_scoped_query(s: &str) -> std::result::Result<ScopedQuery, String> {
    let (category, query) = s
        .split_once('=')
        .ok_or_else(|| format!("expected category=text, got '{}'", s))?;
    Ok(ScopedQuery {
        category: parse_category(category)?,
        query: query.to_string(),
    })
}

/// Parse `category` or `category=text`
pub fn parse_toggle_all(s: &str) -> std::result::Result<ScopedQuery, String> {
    if s.contains('=') {
        parse_scoped_query(s)
    } else {
        Ok(ScopedQuery {
            category: parse_category(s)?,
            query: String::new(),
        })
    }
}
