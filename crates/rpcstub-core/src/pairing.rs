//! Request/response pairing.
//!
//! A request answered by the configured provider is paired with the
//! response of the same name whose provider matches. A response that does
//! not declare a provider answers for whoever its request names.

use crate::model::{Interface, Request, Response};

/// A request and the response it expects, if the schema declares one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestResponsePair<'a> {
    pub request: &'a Request,
    pub response: Option<&'a Response>,
}

impl RequestResponsePair<'_> {
    /// True when no response answers the request
    pub fn is_fire_and_forget(&self) -> bool {
        self.response.is_none()
    }
}

/// Pair every request of `iface` answered by `provider`, in request
/// declaration order.
///
/// When several responses correlate with one request the first in
/// declaration order is used.
pub fn pair<'a>(iface: &'a Interface, provider: &str) -> Vec<RequestResponsePair<'a>> {
    let mut pairs = Vec::new();
    for request in &iface.requests {
        if request.provider.as_deref() != Some(provider) {
            log::debug!(
                "Skipping {}.{}: provider {:?} is not '{}'",
                iface.name,
                request.name,
                request.provider,
                provider
            );
            continue;
        }

        let mut matches = iface
            .responses
            .iter()
            .filter(|response| correlates(request, response, provider));
        let response = matches.next();
        let extra = matches.count();
        if extra > 0 {
            log::warn!(
                "{}.{} matches {} responses; using the first one declared",
                iface.name,
                request.name,
                extra + 1
            );
        }

        let pair = RequestResponsePair { request, response };
        if pair.is_fire_and_forget() {
            log::debug!("{}.{} has no response", iface.name, request.name);
        }
        pairs.push(pair);
    }
    pairs
}

fn correlates(request: &Request, response: &Response, provider: &str) -> bool {
    response.name == request.name
        && response
            .provider
            .as_deref()
            .map_or(true, |answered_by| answered_by == provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, provider: Option<&str>) -> Request {
        Request {
            name: name.to_string(),
            params: Vec::new(),
            provider: provider.map(String::from),
        }
    }

    fn response(name: &str, provider: Option<&str>) -> Response {
        Response {
            name: name.to_string(),
            provider: provider.map(String::from),
        }
    }

    fn iface(requests: Vec<Request>, responses: Vec<Response>) -> Interface {
        Interface {
            name: "UI".to_string(),
            requests,
            responses,
        }
    }

    #[test]
    fn test_order_follows_requests() {
        let ui = iface(
            vec![request("foo", Some("sdl")), request("bar", Some("sdl"))],
            vec![response("bar", Some("sdl")), response("foo", Some("sdl"))],
        );
        let pairs = pair(&ui, "sdl");
        let names: Vec<_> = pairs
            .iter()
            .map(|p| (p.request.name.as_str(), p.response.map(|r| r.name.as_str())))
            .collect();
        assert_eq!(names, vec![("foo", Some("foo")), ("bar", Some("bar"))]);
    }

    #[test]
    fn test_no_response_is_kept() {
        let ui = iface(vec![request("Show", Some("sdl"))], vec![response("Alert", None)]);
        let pairs = pair(&ui, "sdl");
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_fire_and_forget());
    }

    #[test]
    fn test_other_providers_are_skipped() {
        let ui = iface(
            vec![
                request("Show", Some("hmi")),
                request("Alert", Some("sdl")),
                request("Slider", None),
            ],
            vec![response("Show", None), response("Alert", None)],
        );
        let pairs = pair(&ui, "sdl");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].request.name, "Alert");
    }

    #[test]
    fn test_response_provider_must_agree() {
        let ui = iface(
            vec![request("Alert", Some("sdl"))],
            vec![response("Alert", Some("hmi")), response("Alert", None)],
        );
        let pairs = pair(&ui, "sdl");
        let chosen = pairs[0].response.unwrap();
        assert!(std::ptr::eq(chosen, &ui.responses[1]));
    }

    #[test]
    fn test_ambiguous_match_takes_first() {
        let ui = iface(
            vec![request("Alert", Some("sdl"))],
            vec![response("Alert", Some("sdl")), response("Alert", None)],
        );
        let pairs = pair(&ui, "sdl");
        assert!(std::ptr::eq(pairs[0].response.unwrap(), &ui.responses[0]));
    }
}
