//! Storefront Route Table
//!
//! An ordered list of routes resolved first-match-wins.

use super::models::{normalize_path, Route, RouteMatch, RoutePattern, View};
use crate::error::PagesError;
use std::collections::HashSet;

/// Ordered route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from ordered routes.
    ///
    /// Route names must be unique and nothing may follow a catch-all.
    pub fn new(routes: Vec<Route>) -> Result<Self, PagesError> {
        let mut names = HashSet::new();
        let mut catch_all: Option<&Route> = None;

        for route in &routes {
            if let Some(earlier) = catch_all {
                return Err(PagesError::UnreachableRoute {
                    route: route.name.clone(),
                    catch_all: earlier.name.clone(),
                });
            }
            if !names.insert(route.name.as_str()) {
                return Err(PagesError::DuplicateName(route.name.clone()));
            }
            if route.pattern.is_catch_all() {
                catch_all = Some(route);
            }
        }

        Ok(Self { routes })
    }

    /// The storefront's routes: home, product listing and the error page.
    pub fn storefront() -> Self {
        Self {
            routes: vec![
                Route::new(RoutePattern::exact("/"), "Home Page", View::ProductListing),
                Route::new(
                    RoutePattern::exact("/products"),
                    "Products Listing",
                    View::ProductListing,
                ),
                Route::new(RoutePattern::catch_all("pathMatch"), "Error Page", View::Error),
            ],
        }
    }

    /// Routes in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves `path` to the first matching route.
    ///
    /// Query strings and fragments are ignored. Returns `None` only for tables
    /// without a catch-all.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);

        self.routes.iter().find_map(|route| {
            route.pattern.matches(&path).map(|params| RouteMatch {
                path: path.clone(),
                route,
                params,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_name(table: &RouteTable, path: &str) -> Option<String> {
        table.resolve(path).map(|m| m.route.name.clone())
    }

    #[test]
    fn storefront_table_order() {
        let table = RouteTable::storefront();
        let names: Vec<_> = table.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Home Page", "Products Listing", "Error Page"]);
        assert_eq!(RouteTable::new(table.routes().to_vec()).unwrap(), table);
    }

    #[test]
    fn resolves_known_paths() {
        let table = RouteTable::storefront();
        assert_eq!(resolved_name(&table, "/").as_deref(), Some("Home Page"));
        assert_eq!(resolved_name(&table, "").as_deref(), Some("Home Page"));
        assert_eq!(
            resolved_name(&table, "/products").as_deref(),
            Some("Products Listing")
        );
        assert_eq!(
            resolved_name(&table, "/PRODUCTS/").as_deref(),
            Some("Products Listing")
        );
        assert_eq!(
            resolved_name(&table, "/products?sort=price").as_deref(),
            Some("Products Listing")
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_error_page() {
        let table = RouteTable::storefront();
        let matched = table.resolve("/cart/42").unwrap();

        assert_eq!(matched.route.view, View::Error);
        assert_eq!(matched.path, "/cart/42");
        assert_eq!(matched.params["pathMatch"], "cart/42");
    }

    #[test]
    fn first_match_wins() {
        let table = RouteTable::new(vec![
            Route::new(RoutePattern::exact("/products"), "First", View::ProductListing),
            Route::new(RoutePattern::exact("/Products"), "Second", View::Error),
        ])
        .unwrap();

        assert_eq!(resolved_name(&table, "/products").as_deref(), Some("First"));
        assert!(table.resolve("/elsewhere").is_none());
    }

    #[test]
    fn rejects_routes_after_catch_all() {
        let err = RouteTable::new(vec![
            Route::new(RoutePattern::catch_all("rest"), "Everything", View::Error),
            Route::new(RoutePattern::exact("/"), "Home", View::ProductListing),
        ])
        .unwrap_err();

        assert!(matches!(err, PagesError::UnreachableRoute { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RouteTable::new(vec![
            Route::new(RoutePattern::exact("/"), "Home", View::ProductListing),
            Route::new(RoutePattern::exact("/home"), "Home", View::ProductListing),
        ])
        .unwrap_err();

        assert!(matches!(err, PagesError::DuplicateName(name) if name == "Home"));
    }
}
