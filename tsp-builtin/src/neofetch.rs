use super::StartpageProxy;
use sysinfo::System;
use tsp_types::{ExitStatus, OutputKind};

const ASCII_WIDTH: usize = 41;

const ARCH_ASCII: &str = r#"                  -`
                 .o+`
                `ooo/
               `+oooo:
              `+oooooo:
              -+oooooo+:
            `/:-:++oooo+:
           `/++++/+++++++:
          `/++++++++++++++:
         `/+++ooooooooooooo/`
        ./ooosssso++osssssso+`
       .oossssso-````/ossssss+`
      -osssssso.      :ssssssso.
     :osssssss/        osssso+++.
    /ossssssss/        +ssssooo/-
  `/ossssso+/:-        -:/+osssso+-
 `+sso+:-`                 `.-/+oso:
`++:.                           `-/+/
.`                                 `/"#;

/// Built-in neofetch command implementation (also registered as fastfetch and ff)
pub fn command(_argv: Vec<String>, proxy: &mut dyn StartpageProxy) -> ExitStatus {
    let mut sys = System::new_all();
    sys.refresh_all();

    let info = HostInfo {
        os: System::long_os_version().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        host: System::host_name().unwrap_or_else(|| "localhost".to_string()),
        cores: sys.cpus().len(),
        memory_used: sys.used_memory(),
        memory_total: sys.total_memory(),
        uptime_secs: System::uptime(),
        bookmarks: proxy.bookmarks().len(),
        storage: proxy.storage_location(),
    };

    let block = side_by_side(ARCH_ASCII, &info.lines().join("\n"));
    proxy.show(&block, OutputKind::SystemInfo);
    ExitStatus::success()
}

struct HostInfo {
    os: String,
    kernel: String,
    host: String,
    cores: usize,
    memory_used: u64,
    memory_total: u64,
    uptime_secs: u64,
    bookmarks: usize,
    storage: String,
}

impl HostInfo {
    fn lines(&self) -> Vec<String> {
        const MIB: u64 = 1024 * 1024;
        vec![
            "user@terminal-startpage".to_string(),
            "-----------------------".to_string(),
            format!("OS: {}", self.os),
            format!("Kernel: {}", self.kernel),
            format!("Host: {}", self.host),
            format!("CPU Cores: {}", self.cores),
            format!(
                "Memory: {}MiB / {}MiB",
                self.memory_used / MIB,
                self.memory_total / MIB
            ),
            format!("Uptime: {}", format_uptime(self.uptime_secs)),
            format!("Bookmarks: {}", self.bookmarks),
            format!("Storage: {}", self.storage),
        ]
    }
}

/// Place `left` and `right` next to each other, padding the left column to a fixed width.
fn side_by_side(left: &str, right: &str) -> String {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let rows = left.len().max(right.len());

    let mut out = String::new();
    for i in 0..rows {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        out.push_str(&format!("{:<width$}{}", l, r, width = ASCII_WIDTH));
        out.push('\n');
    }
    out
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn format_uptime(secs: u64) -> String {
    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}, {}", plural(days, "day"), plural(hours % 24, "hour"))
    } else if hours > 0 {
        format!("{}, {}", plural(hours, "hour"), plural(minutes % 60, "min"))
    } else if minutes > 0 {
        format!("{}, {}", plural(minutes, "min"), plural(secs % 60, "sec"))
    } else {
        plural(secs, "sec")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockStartpageProxy;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0 secs");
        assert_eq!(format_uptime(1), "1 sec");
        assert_eq!(format_uptime(61), "1 min, 1 sec");
        assert_eq!(format_uptime(2 * 3600 + 5 * 60), "2 hours, 5 mins");
        assert_eq!(format_uptime(26 * 3600), "1 day, 2 hours");
    }

    #[test]
    fn test_side_by_side_pads_left_column() {
        let out = side_by_side("ab\ncd\nef", "x\ny");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], format!("{:<41}x", "ab"));
        assert_eq!(rows[2].trim_end(), "ef");
    }

    #[test]
    fn test_neofetch_emits_system_info_block() {
        let mut proxy = MockStartpageProxy::new();
        let status = command(vec!["ff".to_string()], &mut proxy);
        assert_eq!(status, ExitStatus::success());

        let (text, kind) = proxy.last_line().unwrap();
        assert_eq!(*kind, OutputKind::SystemInfo);
        assert!(text.contains("user@terminal-startpage"));
        assert!(text.contains("Bookmarks: 0"));
        assert!(text.contains("Storage: memory"));
    }
}
