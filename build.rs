use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Backends a build can select, widest first
const BACKENDS: [&str; 5] = ["avx512", "avx2", "sse", "neon", "fallback"];

// First stable release shipping the AVX-512 target features and intrinsics
const AVX512_STABLE_MINOR: u32 = 89;

#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_feature: &'static str,
    cfg_flag: &'static str,
    arch: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "avx512f" => 0,
            "avx2" => 1,
            "sse2" => 2,
            "neon" => 3,
            _ => usize::MAX,
        }
    }

    fn features(avx512_supported: bool) -> Vec<CpuFeature> {
        let mut features = vec![
            CpuFeature {
                name: "sse2",
                target_feature: "sse2",
                cfg_flag: "sse",
                arch: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                target_feature: "avx2",
                cfg_flag: "avx2",
                arch: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_feature: "neon",
                cfg_flag: "neon",
                arch: &["aarch64"],
                detected: false,
            },
        ];

        if avx512_supported {
            features.push(CpuFeature {
                name: "avx512f",
                target_feature: "avx512f",
                cfg_flag: "avx512",
                arch: &["x86", "x86_64"],
                detected: false,
            });
        }

        features
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Features the target or RUSTFLAGS already turn on
struct TargetDetector {
    enabled: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_string())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self { enabled }
    }
}

impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            if self.enabled.iter().any(|f| f == feature.target_feature) {
                feature.detected = true;
            }
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                let flag = match feature.name {
                    // aarch64 kernels report Advanced SIMD as "asimd"
                    "neon" => "asimd",
                    name => name,
                };
                if contents.split_whitespace().any(|word| word == flag) {
                    feature.detected = true;
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                let found = match feature.name {
                    "avx512f" => contents.contains("hw.optional.avx512f: 1"),
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "sse2" => contents.contains("hw.optional.sse2: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
                if found {
                    feature.detected = true;
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct Toolchain {
    channel: String,
    minor: u32,
}

impl Toolchain {
    fn detect() -> Self {
        let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        let version_info = Command::new(rustc)
            .args(["--version", "--verbose"])
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).into_owned())
            .unwrap_or_default();

        let channel = if version_info.contains("nightly") {
            "nightly".to_string()
        } else {
            "stable".to_string()
        };

        // "release: 1.89.0-nightly"
        let minor = version_info
            .lines()
            .find_map(|line| line.strip_prefix("release: "))
            .and_then(|release| release.split('.').nth(1))
            .and_then(|minor| minor.parse().ok())
            .unwrap_or(0);

        Self { channel, minor }
    }

    fn is_nightly(&self) -> bool {
        self.channel == "nightly"
    }

    fn avx512_supported(&self) -> bool {
        self.is_nightly() || self.minor >= AVX512_STABLE_MINOR
    }

    fn avx512_needs_feature_gate(&self) -> bool {
        self.is_nightly() && self.minor < AVX512_STABLE_MINOR
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn select(features: &mut [CpuFeature], target_arch: &str) -> &'static str {
        features.sort();

        let best = features
            .iter()
            .filter(|feature| feature.arch.contains(&target_arch))
            .find(|feature| feature.detected)
            .map(|feature| feature.cfg_flag)
            .unwrap_or("fallback");

        match env::var("FHT_BACKEND") {
            Ok(forced) => Self::apply_override(&forced, best, features, target_arch),
            Err(_) => best,
        }
    }

    fn apply_override(
        forced: &str,
        best: &'static str,
        features: &[CpuFeature],
        target_arch: &str,
    ) -> &'static str {
        let forced = forced.trim().to_lowercase();

        if forced == "fallback" {
            return "fallback";
        }

        let usable = features.iter().find(|feature| {
            feature.cfg_flag == forced && feature.detected && feature.arch.contains(&target_arch)
        });

        match usable {
            Some(feature) => feature.cfg_flag,
            None => {
                println!(
                    "cargo:warning=FHT_BACKEND={forced} is not available for this target, using {best}"
                );
                best
            }
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FHT_BACKEND");

    let toolchain = Toolchain::detect();

    println!("cargo:rustc-cfg=rustc_channel=\"{}\"", toolchain.channel);
    println!("cargo::rustc-check-cfg=cfg(rustc_channel, values(\"nightly\", \"stable\"))");

    for backend in BACKENDS {
        println!("cargo::rustc-check-cfg=cfg({backend})");
    }
    println!("cargo::rustc-check-cfg=cfg(unstable_avx512)");

    let mut features = CpuFeature::features(toolchain.avx512_supported());

    TargetDetector::from_env().detect_features(&mut features);

    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    // The running CPU only describes the target for native builds
    if host == target {
        PlatformDetector::detect_cpu_features(&mut features);
    } else {
        println!("cargo:warning=cross-compiling for {target}: using target features only");
    }

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let cfg_flag = PlatformDetector::select(&mut features, &target_arch);

    println!("applying: {cfg_flag}");
    println!("cargo:rustc-cfg={cfg_flag}");

    if cfg_flag == "avx512" && toolchain.avx512_needs_feature_gate() {
        println!("cargo:rustc-cfg=unstable_avx512");
    }
}
