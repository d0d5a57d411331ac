// 禁用Windows控制台窗口
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use communityx::utils::logger;

fn main() {
    // 加载.env配置 (顾问服务地址与行情API密钥)
    dotenvy::dotenv().ok();

    // 初始化日志系统
    logger::init().expect("日志系统初始化失败");

    // 启动Tauri应用
    communityx::run();
}
