//! Rendering of the generated setup module (src/auto-generated.ts)
//!
//! The setup module carries everything a consumer needs to load the package
//! at run time: the dependency tables, the webpack externals map, the
//! exported symbol of every load-time dependency and the bundle entry map.
//! All of it is a pure function of the template configuration.

use serde_json::{Map, Value, json};

use crate::config::{Dependencies, Template, api_key};
use crate::error::Result;

/// Exported symbol root of a dependency, e.g. `rxjs_APIv6`
pub fn exported_symbol(name: &str, range: &str) -> Result<String> {
    let key = api_key(name, range)?;
    Ok(format!("{name}_APIv{key}"))
}

/// The runTimeDependencies constant: load-time externals and bundled deps
pub fn run_time_dependencies(deps: &Dependencies) -> Value {
    json!({
        "externals": deps.run_time.load,
        "includedInBundle": deps.run_time.included_in_bundle,
    })
}

/// The webpack externals map for all load-time dependencies
pub fn externals(deps: &Dependencies) -> Result<Value> {
    let mut map = Map::new();
    for (name, range) in &deps.run_time.load {
        map.insert(
            name.clone(),
            json!({
                "commonjs": name,
                "commonjs2": name,
                "root": exported_symbol(name, range)?,
            }),
        );
    }
    Ok(Value::Object(map))
}

/// The exported-symbols map for all load-time dependencies
pub fn exported_symbols(deps: &Dependencies) -> Result<Value> {
    let mut map = Map::new();
    for (name, range) in &deps.run_time.load {
        map.insert(
            name.clone(),
            json!({
                "apiKey": api_key(name, range)?,
                "exportedSymbol": name,
            }),
        );
    }
    Ok(Value::Object(map))
}

/// The entry map: package name to bundle entry file, plus one
/// `{package}/{alias}` entry per declared alias
pub fn entries(template: &Template) -> Value {
    let mut map = Map::new();
    map.insert(
        template.name.clone(),
        Value::String(template.bundle.entry_file.clone()),
    );
    for alias in &template.bundle.aliases {
        map.insert(
            format!("{}/{alias}", template.name),
            Value::String(template.bundle.entry_file.clone()),
        );
    }
    Value::Object(map)
}

/// Render the complete setup module
pub fn render(template: &Template) -> Result<String> {
    use std::fmt::Write;

    let run_time = serde_json::to_string_pretty(&run_time_dependencies(&template.dependencies))?;
    let externals = serde_json::to_string_pretty(&externals(&template.dependencies)?)?;
    let symbols = serde_json::to_string_pretty(&exported_symbols(&template.dependencies)?)?;
    let main_entry = serde_json::to_string_pretty(&json!({
        "entryFile": template.bundle.entry_file,
        "loadDependencies": template.bundle.load_dependencies,
    }))?;
    let entry_map = serde_json::to_string_pretty(&entries(template))?;

    let name = serde_json::to_string(&template.name)?;
    let version = serde_json::to_string(&template.version)?;
    let description = serde_json::to_string(&template.short_description)?;
    let author = serde_json::to_string(&template.author)?;
    let api_version = serde_json::to_string(&template.api_version()?)?;
    let aliases = serde_json::to_string(&template.bundle.aliases)?;

    let mut out = String::new();
    let _ = writeln!(out, "/* eslint-disable */");
    let _ = writeln!(out, "// Generated by tscaffold. Do not edit.");
    let _ = writeln!(out);
    let _ = writeln!(out, "const runTimeDependencies = {run_time}");
    let _ = writeln!(out, "const externals = {externals}");
    let _ = writeln!(out, "const exportedSymbols = {symbols}");
    let _ = writeln!(out, "const mainEntry = {main_entry}");
    let _ = writeln!(out, "const entries = {entry_map}");
    let _ = writeln!(out);
    let _ = writeln!(out, "export const setup = {{");
    let _ = writeln!(out, "    name: {name},");
    let _ = writeln!(out, "    version: {version},");
    let _ = writeln!(out, "    shortDescription: {description},");
    let _ = writeln!(out, "    author: {author},");
    let _ = writeln!(out, "    apiVersion: {api_version},");
    let _ = writeln!(out, "    aliases: {aliases},");
    let _ = writeln!(out, "    runTimeDependencies,");
    let _ = writeln!(out, "    externals,");
    let _ = writeln!(out, "    exportedSymbols,");
    let _ = writeln!(out, "    mainEntry,");
    let _ = writeln!(out, "    entries,");
    let _ = writeln!(
        out,
        "    getDependencySymbolExported: (module: string) =>"
    );
    let _ = writeln!(
        out,
        "        `${{exportedSymbols[module].exportedSymbol}}_APIv${{exportedSymbols[module].apiKey}}`,"
    );
    let _ = writeln!(out, "}}");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template {
        Template::from_yaml(
            r#"
name: "@acme/widgets"
version: 0.1.2
shortDescription: Widget library
author: dev@acme.com
dependencies:
  runTime:
    load:
      "@youwol/cdn-client": ^0.1.3
      rxjs: ^6.5.5
      uuid: ^8.3.2
bundle:
  entryFile: ./lib/index.ts
  loadDependencies: [rxjs, uuid]
  aliases: [widgets]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_exported_symbol() {
        assert_eq!(exported_symbol("rxjs", "^6.5.5").unwrap(), "rxjs_APIv6");
        assert_eq!(
            exported_symbol("@youwol/cdn-client", "^0.1.3").unwrap(),
            "@youwol/cdn-client_APIv01"
        );
    }

    #[test]
    fn test_externals_roots() {
        let value = externals(&template().dependencies).unwrap();
        assert_eq!(value["rxjs"]["root"], "rxjs_APIv6");
        assert_eq!(value["rxjs"]["commonjs"], "rxjs");
        assert_eq!(value["uuid"]["root"], "uuid_APIv8");
        assert_eq!(value["@youwol/cdn-client"]["root"], "@youwol/cdn-client_APIv01");
    }

    #[test]
    fn test_exported_symbols_api_keys() {
        let value = exported_symbols(&template().dependencies).unwrap();
        assert_eq!(value["rxjs"]["apiKey"], "6");
        assert_eq!(value["uuid"]["exportedSymbol"], "uuid");
        assert_eq!(value["@youwol/cdn-client"]["apiKey"], "01");
    }

    #[test]
    fn test_entries_map() {
        let value = entries(&template());
        assert_eq!(value["@acme/widgets"], "./lib/index.ts");
    }

    #[test]
    fn test_entries_map_includes_aliases() {
        let value = entries(&template());
        assert_eq!(value["@acme/widgets/widgets"], "./lib/index.ts");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_render_carries_alias_entries() {
        let out = render(&template()).unwrap();
        assert!(out.contains("\"@acme/widgets/widgets\": \"./lib/index.ts\""));
    }

    #[test]
    fn test_render_carries_identity() {
        let out = render(&template()).unwrap();
        assert!(out.contains("name: \"@acme/widgets\","));
        assert!(out.contains("version: \"0.1.2\","));
        assert!(out.contains("shortDescription: \"Widget library\","));
        assert!(out.contains("apiVersion: \"01\","));
        assert!(out.contains("aliases: [\"widgets\"],"));
    }

    #[test]
    fn test_render_carries_load_dependencies() {
        let out = render(&template()).unwrap();
        assert!(out.contains("rxjs_APIv6"));
        assert!(out.contains("\"loadDependencies\": ["));
        assert!(out.contains("export const setup = {"));
    }

    #[test]
    fn test_render_bad_range_fails() {
        let mut t = template();
        t.dependencies
            .run_time
            .load
            .insert("broken".to_string(), "latest".to_string());
        assert!(render(&t).is_err());
    }
}
