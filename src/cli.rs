use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nlcmd")]
#[command(version)]
#[command(about = "Translate natural language into Linux commands", long_about = None)]
pub struct Cli {
    /// 자연어 작업 설명
    #[arg(required_unless_present = "init_config")]
    pub query: Vec<String>,

    /// 번역에 사용할 모델. 미지정시 설정 파일의 default_model 사용
    #[arg(long)]
    pub model: Option<String>,

    /// 명령어 설명 출력
    #[arg(long, overrides_with = "no_explain")]
    pub explain: bool,

    /// 설명 끄기 (기본값)
    #[arg(long, overrides_with = "explain")]
    pub no_explain: bool,

    /// 확인 없이 바로 실행 (위험)
    #[arg(long, overrides_with = "no_trust")]
    pub trust: bool,

    /// 실행 전 확인 (기본값)
    #[arg(long, overrides_with = "trust")]
    pub no_trust: bool,

    /// 명령어 앞에 sudo 추가
    #[arg(long, overrides_with = "no_sudo")]
    pub sudo: bool,

    /// sudo 없이 실행 (기본값)
    #[arg(long, overrides_with = "sudo")]
    pub no_sudo: bool,

    /// 실행 제한 시간 (초). 미지정시 설정 파일의 default_timeout_secs 사용
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// 디버그 모드
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 기본 설정 파일 생성 (~/.nlcmd/config.toml)
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
