use super::Messages;

pub(super) static MESSAGES: Messages = Messages {
    app_title: "AI 工具管理器 (ATM)",
    app_goodbye: "再见！",
    app_initializing: "正在初始化...",
    app_separator: "─────────────────────────────────────────────",

    menu_what_to_do: "你想做什么？",
    menu_install: "安装工具",
    menu_query: "查询工具",
    menu_update: "更新工具",
    menu_uninstall: "卸载工具",
    menu_exit: "退出",

    prompt_press_space: "(空格键选择，回车键确认)",

    install_select: "选择要安装的工具：",
    install_all_installed: "所有工具已安装",
    install_none_selected: "未选择任何工具",
    install_installing: "正在安装 {0}...",
    install_success: "成功安装 {0}",
    install_failed: "安装 {0} 失败：{1}",

    query_none_installed: "未安装任何工具",
    query_checking: "正在检查版本...",
    query_installed_tools: "已安装的工具：",
    query_version: "版本：",
    query_update_available: "(可更新至：v{0})",
    query_up_to_date: "(已是最新)",
    query_unknown_version: "未知",

    update_checking: "正在检查更新...",
    update_all_up_to_date: "所有工具已是最新版本",
    update_select: "选择要更新的工具：",
    update_none_selected: "未选择任何工具",
    update_updating: "正在更新 {0}...",
    update_success: "成功更新 {0}",
    update_failed: "更新 {0} 失败：{1}",

    uninstall_none_installed: "未安装任何工具",
    uninstall_select: "选择要卸载的工具：",
    uninstall_none_selected: "未选择任何工具",
    uninstall_confirm: "确定要卸载 {0} 个工具吗？",
    uninstall_cancelled: "已取消卸载",
    uninstall_uninstalling: "正在卸载 {0}...",
    uninstall_success: "成功卸载 {0}",
    uninstall_failed: "卸载 {0} 失败：{1}",

    version_checking: "正在检查更新...",
    version_update_available: "ATM 有新版本可用！",
    version_current: "当前版本：v{0}",
    version_latest: "最新版本：v{0}",
    version_update_prompt: "是否打开仓库？",
    version_open_repository: "是，打开仓库",
    version_skip_update: "否，暂时跳过",
    version_repository_opened: "已在浏览器中打开仓库",
    version_repository_open_failed: "无法自动打开浏览器，请访问：{0}",

    config_load_error: "加载配置失败",
};
