use url::form_urlencoded;

/// Render form params as the gateway's POST body.
///
/// Every pair is written as `&key=value`, including the first one; the deployed
/// gateway has always received bodies in this shape.
pub fn encode_form_body(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("&{}={}", escape(key), escape(value)))
        .collect()
}

fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_is_prefixed_and_escaped() {
        let params = vec![
            ("from".to_owned(), "MyApp".to_owned()),
            ("text".to_owned(), "Hello & bye! é".to_owned()),
        ];
        assert_eq!(
            encode_form_body(&params),
            "&from=MyApp&text=Hello+%26+bye%21+%C3%A9"
        );
    }

    #[test]
    fn no_params_is_an_empty_body() {
        assert_eq!(encode_form_body(&[]), "");
    }
}
