use reqwest::Method;

/// An endpoint as listed in the route table, possibly containing `:name`
/// placeholder segments
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub path: &'static str,
    pub method: Method,
}

/// A [`PathSpec`] with all placeholder segments filled in, ready to be
/// appended to the server address
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub path: String,
    pub method: Method,
}

impl PathSpec {
    pub const fn get(path: &'static str) -> Self {
        Self {
            path,
            method: Method::GET,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            path,
            method: Method::POST,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            path,
            method: Method::PUT,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            path,
            method: Method::DELETE,
        }
    }

    /// Substitutes each `(name, value)` pair into the matching `:name`
    /// placeholder. Values are substituted verbatim, no escaping.
    pub fn resolve(&self, params: &[(&str, &str)]) -> ResolvedPath {
        let mut path = self.path.to_string();
        for (name, value) in params {
            let token = format!(":{name}");
            debug_assert!(
                path.contains(&token),
                "no placeholder {token:?} in {:?}",
                self.path
            );
            path = path.replace(&token, value);
        }
        ResolvedPath {
            path,
            method: self.method.clone(),
        }
    }
}

impl From<&PathSpec> for ResolvedPath {
    fn from(value: &PathSpec) -> Self {
        debug_assert!(
            !value.path.contains(':'),
            "unfilled placeholder in {:?}, use resolve instead",
            value.path
        );
        Self {
            path: value.path.to_string(),
            method: value.method.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single(
        PathSpec::get("/api/users/check/:username"),
        &[("username", "ali")],
        "/api/users/check/ali"
    )]
    #[case::two_params(
        PathSpec::put("/api/tasklists/:id/todos/:todo_id"),
        &[("id", "a1"), ("todo_id", "b2")],
        "/api/tasklists/a1/todos/b2"
    )]
    #[case::verbatim_value(
        PathSpec::get("/api/users/check/:username"),
        &[("username", "a li")],
        "/api/users/check/a li"
    )]
    fn resolve_substitutes_placeholders(
        #[case] spec: PathSpec,
        #[case] params: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        // Act
        let actual = spec.resolve(params);

        // Assert
        assert_eq!(actual.path, expected);
        assert_eq!(actual.method, spec.method);
    }

    #[test]
    fn parameterless_path_converts_directly() {
        let actual: ResolvedPath = (&PathSpec::post("/api/tasklists")).into();
        assert_eq!(actual.path, "/api/tasklists");
        assert_eq!(actual.method, Method::POST);
    }
}
