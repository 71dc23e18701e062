use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell script standing in for `ollama run`: counts its calls, logs its
/// arguments and answers with a summary naming the call number.
pub(crate) struct FakeModel {
    pub(crate) script: PathBuf,
    calls_file: PathBuf,
    args_log: PathBuf,
}

impl FakeModel {
    /// Install the script under `dir`. `fail_on` makes that call exit non-zero.
    pub(crate) fn install(dir: &Path, fail_on: Option<usize>) -> Self {
        let bin_dir = dir.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let script = bin_dir.join("fake-model");
        let calls_file = dir.join("model-calls");
        let args_log = dir.join("model-args.log");

        let script_content = format!(
            r#"#!/bin/sh
n=$(( $(cat '{calls}' 2>/dev/null || echo 0) + 1 ))
echo "$n" > '{calls}'
echo "$*" >> '{args}'
lines=$(wc -l | tr -d ' ')
if [ "$n" -eq {fail_on} ]; then
    echo "model crashed" >&2
    exit 3
fi
echo "summary $n ($lines lines)"
"#,
            calls = calls_file.display(),
            args = args_log.display(),
            fail_on = fail_on.unwrap_or(0),
        );
        fs::write(&script, script_content).expect("Failed to write fake model script");
        let mut perms = fs::metadata(&script).expect("Failed to stat fake model").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("Failed to make fake model executable");

        Self { script, calls_file, args_log }
    }

    /// `[summarizer.command]` table pointing at the script.
    pub(crate) fn config_toml(&self) -> String {
        format!(
            "[summarizer.command]\nprogram = '{}'\nargs = [\"--model\", \"{{model}}\", \"--temperature\", \"{{temperature}}\"]\n",
            self.script.display()
        )
    }

    pub(crate) fn calls(&self) -> usize {
        fs::read_to_string(&self.calls_file)
            .map(|text| text.trim().parse().expect("call counter is numeric"))
            .unwrap_or(0)
    }

    /// Argument line of every call, in call order.
    pub(crate) fn args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_log)
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
