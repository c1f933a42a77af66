//local shortcuts

//third-party shortcuts
use url::Url;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Appends a pre-encoded `key=value` fragment to the query of `uri`.
///
/// Existing parameters are kept and the new fragment is joined after them with `&`. If the query is missing or
/// empty, the fragment becomes the whole query. The fragment is not decoded and existing escapes are kept as-is.
///
/// [`Url`] only stores valid queries, so bytes outside the query set are percent-encoded on the way in: space, `"`,
/// `<`, `>` and `#` always, and `'` as well for special schemes such as `file:` and `https:`.
pub fn append_query(mut uri: Url, key_value: &str) -> Url
{
    let joined = match uri.query()
    {
        Some(old) if !old.is_empty() => format!("{old}&{key_value}"),
        _                            => key_value.to_string(),
    };
    uri.set_query(Some(&joined));
    uri
}

//-------------------------------------------------------------------------------------------------------------------
