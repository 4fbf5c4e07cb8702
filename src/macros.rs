//! Macros for declaring static feature catalogs.

/// Declare a feature catalog as a static configuration table.
///
/// Each block declares a display group (or `_` for ungrouped features) and
/// lists its features as `"Name" => "doc-key"` pairs. The expansion builds a
/// [`FeatureCatalog`](crate::catalog::FeatureCatalog), so the usual
/// uniqueness validation applies and the result is a `Result`.
///
/// # Example
///
/// ```
/// use togglekit::catalog;
///
/// let catalog = catalog! {
///     "Main library" => {
///         "React" => "react",
///         "Vue" => "vue",
///     },
///     "Styling" => {
///         "CSS" => "css",
///         "PostCSS" => "postcss",
///     },
///     _ => {
///         "React hot loader" => "react-hot-loader",
///     },
/// }
/// .unwrap();
///
/// assert_eq!(catalog.len(), 5);
/// assert!(catalog.get("React hot loader").unwrap().group.is_none());
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $( $group:tt => { $( $feature:literal => $doc:literal ),* $(,)? } ),* $(,)?
    ) => {
        $crate::catalog::FeatureCatalog::from_features(vec![
            $( $( $crate::catalog!(@feature $group, $feature, $doc), )* )*
        ])
    };
    (@feature _, $feature:literal, $doc:literal) => {
        $crate::catalog::Feature::new($feature, $doc)
    };
    (@feature $group:literal, $feature:literal, $doc:literal) => {
        $crate::catalog::Feature::new($feature, $doc).with_group($group)
    };
}
