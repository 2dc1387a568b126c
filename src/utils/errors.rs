/// Extract the meaningful tail of a transport error string.
///
/// Reqwest errors arrive as nested chains like
/// "Request failed: error sending request for url (http://...): connection refused"
/// and only the last segment is worth showing to the user.
pub fn extract_clean_error(error_msg: &str) -> String {
    if error_msg.contains("Request failed:") || error_msg.contains("error sending request") {
        if let Some(last_colon) = error_msg.rfind(": ") {
            return error_msg[last_colon + 2..].trim().to_string();
        }
    }
    error_msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_transport_error_is_trimmed_to_the_cause() {
        let raw = "Request failed: error sending request for url (http://api): connection refused";
        assert_eq!(extract_clean_error(raw), "connection refused");
    }

    #[test]
    fn plain_messages_pass_through() {
        assert_eq!(
            extract_clean_error("Insufficient balance in selected wallet."),
            "Insufficient balance in selected wallet."
        );
    }
}
