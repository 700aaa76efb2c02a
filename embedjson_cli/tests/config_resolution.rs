mod common;

use embedjson_core::AnyEmptyResult;

#[test]
fn uses_symbol_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	std::fs::write(&input, "{}")?;
	std::fs::write(tmp.path().join("embedjson.toml"), "symbol = \"device\"\n")?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--stdout")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("static const char device[] = {0x7b, 0x7d, 0x0a};\n");

	Ok(())
}

#[test]
fn flag_overrides_config_symbol() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	std::fs::write(&input, "{}")?;
	std::fs::write(tmp.path().join(".embedjson.toml"), "symbol = \"device\"\n")?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--stdout")
		.arg("-s")
		.arg("override")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::starts_with("static const char override[]"));

	Ok(())
}

#[test]
fn uses_extension_from_dot_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	std::fs::write(&input, "{}")?;
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(
		tmp.path().join(".config/embedjson.toml"),
		"extension = \"h\"\n",
	)?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("device.h").is_file());
	assert!(!tmp.path().join("device.cpp").exists());

	Ok(())
}

#[test]
fn explicit_config_skips_discovery() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	let explicit = tmp.path().join("custom.toml");
	std::fs::write(&input, "{}")?;
	std::fs::write(tmp.path().join("embedjson.toml"), "symbol = \"discovered\"\n")?;
	std::fs::write(&explicit, "symbol = \"explicit\"\nbytes_per_line = 1\n")?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--stdout")
		.arg("--config")
		.arg(&explicit)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("static const char explicit[] = {0x7b,\n0x7d,\n0x0a};\n");

	Ok(())
}

#[test]
fn invalid_config_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	std::fs::write(&input, "{}")?;
	std::fs::write(tmp.path().join("embedjson.toml"), "bytes_per_line = \"many\"\n")?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	assert!(!tmp.path().join("device.cpp").exists());

	Ok(())
}

#[test]
fn missing_explicit_config_names_the_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("device.json");
	std::fs::write(&input, "{}")?;

	common::embedjson_cmd()
		.arg(&input)
		.arg("--config")
		.arg(tmp.path().join("nope.toml"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("could not read config file"))
		.stderr(predicates::str::contains("nope.toml"));

	assert!(!tmp.path().join("device.cpp").exists());

	Ok(())
}
