use std::collections::HashMap;
use once_cell::sync::Lazy;

static LANGUAGES_BY_EXTENSION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".java", "java"),
        (".js", "javascript"),
        (".jsx", "javascript"),
        (".ts", "typescript"),
        (".tsx", "typescript"),
        (".py", "python"),
        (".go", "go"),
        (".rb", "ruby"),
        (".php", "php"),
        (".cpp", "cpp"),
        (".cc", "cpp"),
        (".c", "c"),
        (".cs", "csharp"),
        (".kt", "kotlin"),
        (".swift", "swift"),
        (".scala", "scala"),
        (".rs", "rust"),
    ])
});

pub fn language_from_file_name(file_name: &str) -> &'static str {
    LANGUAGES_BY_EXTENSION
        .iter()
        .find(|(ext, _)| file_name.ends_with(*ext))
        .map(|(_, lang)| *lang)
        .unwrap_or("unknown")
}

pub fn file_name_from_path(file_path: &str) -> &str {
    file_path.rsplit('/').next().unwrap_or(file_path)
}

pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[pos..],
        None => "",
    }
}
