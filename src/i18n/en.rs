use super::Messages;

pub(super) static MESSAGES: Messages = Messages {
    app_title: "AI Tools Manager (ATM)",
    app_goodbye: "Goodbye!",
    app_initializing: "Initializing...",
    app_separator: "─────────────────────────────────────────────",

    menu_what_to_do: "What would you like to do?",
    menu_install: "Install Tools",
    menu_query: "Query Tools",
    menu_update: "Update Tools",
    menu_uninstall: "Uninstall Tools",
    menu_exit: "Exit",

    prompt_press_space: "(Press space to select, enter to confirm)",

    install_select: "Select tools to install:",
    install_all_installed: "All tools are already installed",
    install_none_selected: "No tools selected",
    install_installing: "Installing {0}...",
    install_success: "Successfully installed {0}",
    install_failed: "Failed to install {0}: {1}",

    query_none_installed: "No tools installed",
    query_checking: "Checking versions...",
    query_installed_tools: "Installed Tools:",
    query_version: "Version:",
    query_update_available: "(Update available: v{0})",
    query_up_to_date: "(Up to date)",
    query_unknown_version: "Unknown",

    update_checking: "Checking for updates...",
    update_all_up_to_date: "All tools are up to date",
    update_select: "Select tools to update:",
    update_none_selected: "No tools selected",
    update_updating: "Updating {0}...",
    update_success: "Successfully updated {0}",
    update_failed: "Failed to update {0}: {1}",

    uninstall_none_installed: "No tools installed",
    uninstall_select: "Select tools to uninstall:",
    uninstall_none_selected: "No tools selected",
    uninstall_confirm: "Are you sure you want to uninstall {0} tool(s)?",
    uninstall_cancelled: "Uninstall cancelled",
    uninstall_uninstalling: "Uninstalling {0}...",
    uninstall_success: "Successfully uninstalled {0}",
    uninstall_failed: "Failed to uninstall {0}: {1}",

    version_checking: "Checking for updates...",
    version_update_available: "A new version of ATM is available!",
    version_current: "Current version: v{0}",
    version_latest: "Latest version: v{0}",
    version_update_prompt: "Would you like to open the repository?",
    version_open_repository: "Yes, open repository",
    version_skip_update: "No, skip for now",
    version_repository_opened: "Repository opened in browser",
    version_repository_open_failed: "Could not open browser automatically. Please visit: {0}",

    config_load_error: "Failed to load configuration",
};
